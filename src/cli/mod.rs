mod display;
mod interface;

pub use display::display_result;
pub use interface::Console;
