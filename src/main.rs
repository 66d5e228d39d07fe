use clap::Parser;
use escape_fractals::{Cli, PngFilePresenter, RenderController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let (request, config) = Cli::parse().into_render()?;
    let controller = RenderController::new(PngFilePresenter::new(), config);
    let summary = controller.render(&request)?;

    println!(
        "Saved {} ({}x{}, {} points in the set) to {}",
        request.kind.display_name(),
        summary.shape.cols,
        summary.shape.rows,
        summary.members,
        summary.path.display()
    );

    Ok(())
}
