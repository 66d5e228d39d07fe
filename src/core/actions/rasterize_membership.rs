use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::grid::MembershipGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Members are painted black on a white canvas.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BlackOnWhite;

impl ColourMap for BlackOnWhite {
    type T = bool;

    fn map(&self, member: bool) -> Colour {
        if member { Colour::BLACK } else { Colour::WHITE }
    }
}

/// Paints one pixel per grid element, grid row 0 becoming the top image row.
pub fn rasterize_membership<CMap: ColourMap<T = bool>>(
    grid: &MembershipGrid,
    colour_map: &CMap,
) -> Result<PixelBuffer, PixelBufferError> {
    let buffer = grid
        .as_slice()
        .iter()
        .flat_map(|&member| {
            let Colour { r, g, b } = colour_map.map(member);
            [r, g, b]
        })
        .collect();

    PixelBuffer::from_data(grid.shape(), buffer)
}
