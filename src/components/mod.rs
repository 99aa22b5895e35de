pub mod clock_face;
pub mod help;
pub mod input_line;
pub mod month_view;
pub mod status_bar;
pub mod task_list;

pub use clock_face::ClockFace;
pub use help::HelpOverlay;
pub use input_line::InputLine;
pub use month_view::MonthView;
pub use status_bar::StatusBar;
pub use task_list::TaskListView;
