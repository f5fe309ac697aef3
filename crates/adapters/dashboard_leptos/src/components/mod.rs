mod cube_grid;
mod nav;
mod range_field;
mod run_controls;
mod stat_card;
mod toggle_field;

pub use cube_grid::CubeGrid;
pub use nav::Nav;
pub use range_field::RangeField;
pub use run_controls::RunControls;
pub use stat_card::StatCard;
pub use toggle_field::ToggleField;
