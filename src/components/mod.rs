use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod split_view;
pub mod status_bar;
pub mod text_pane;

pub use split_view::{MountGuard, SplitFocus, SplitView};
pub use status_bar::StatusBar;
pub use text_pane::TextPane;

pub use crate::component_context::ComponentContext;

pub trait Component {
    fn resize(&mut self, _area: Rect, _ctx: &ComponentContext) {}

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn resize(&mut self, area: Rect, ctx: &ComponentContext) {
        (**self).resize(area, ctx)
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        (**self).render(frame, area, ctx)
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        (**self).handle_event(event, ctx)
    }
}
