pub mod grid;
pub mod view;

pub use grid::MonthGrid;
pub use view::CalendarView;
