pub mod grid_view;
pub mod month_calendar;

pub use grid_view::{GridView, GridViewResponse};
pub use month_calendar::MonthCalendar;
