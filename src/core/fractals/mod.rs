pub mod fractal_kinds;
pub mod membership;
pub mod recurrence;
