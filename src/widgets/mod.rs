//! Built-in widgets.
//!
//! Every widget composes the shared state machines from
//! [`widget`](crate::widget) with the [`Widget`](crate::widget::Widget)
//! draw/handle-key contract: [`Label`], [`Button`], [`Separator`],
//! [`List`], [`LineEdit`], [`WordChoice`], [`ProgressBar`], [`PieChart`].

pub mod button;
pub mod label;
pub mod line_edit;
pub mod list;
pub mod pie_chart;
pub mod progress;
pub mod separator;
pub mod word_choice;

pub use button::Button;
pub use label::Label;
pub use line_edit::LineEdit;
pub use list::List;
pub use pie_chart::PieChart;
pub use progress::ProgressBar;
pub use separator::Separator;
pub use word_choice::{Alignment, WordChoice};
