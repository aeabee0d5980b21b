// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports the laid-out height of its content.
//! The height is published as a message whenever it changes, so the
//! application can keep a measurement of an element it does not lay out itself.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Last height published by a [`Measured`] widget.
#[derive(Debug, Default)]
struct State {
    reported: Option<f32>,
}

/// A widget that wraps content and reports its height.
pub struct Measured<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_measure: Box<dyn Fn(f32) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> Measured<'a, Message, Theme, Renderer> {
    /// Creates a new `Measured` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_measure: impl Fn(f32) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_measure: Box::new(on_measure),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Measured<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let height = layout.bounds().height;
        let state = tree.state.downcast_mut::<State>();
        if needs_report(state.reported, height) {
            state.reported = Some(height);
            shell.publish((self.on_measure)(height));
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Measured<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Measured<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a measuring wrapper.
pub fn measured<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_measure: impl Fn(f32) -> Message + 'a,
) -> Measured<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Measured::new(content, on_measure)
}

fn needs_report(reported: Option<f32>, height: f32) -> bool {
    height > 0.0 && reported.is_none_or(|last| (last - height).abs() > 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_positive_height_is_reported() {
        assert!(needs_report(None, 48.0));
    }

    #[test]
    fn zero_height_is_not_reported() {
        assert!(!needs_report(None, 0.0));
    }

    #[test]
    fn unchanged_height_is_not_reported_again() {
        assert!(!needs_report(Some(48.0), 48.0));
        assert!(!needs_report(Some(48.0), 48.3));
    }

    #[test]
    fn changed_height_is_reported() {
        assert!(needs_report(Some(48.0), 60.0));
    }
}
