//! Alert Component

use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex, v_flex};

use crate::constants::GRID_CONTAINER_MAX_WIDTH;
use crate::theme::Typography;
use crate::theme::styles::{AlertGlyph, AlertStyle, AlertVariant};

/// How assistive technology announces the alert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertRole {
    /// Interrupts the user
    #[default]
    Alert,
    /// Announced politely
    Status,
}

impl AlertGlyph {
    fn icon_name(self) -> IconName {
        match self {
            AlertGlyph::Info => IconName::Info,
            AlertGlyph::CheckCircle => IconName::CircleCheck,
            AlertGlyph::Warning => IconName::TriangleAlert,
            AlertGlyph::Error => IconName::CircleX,
        }
    }
}

/// A USWDS alert box
#[derive(IntoElement)]
pub struct Alert {
    variant: AlertVariant,
    role: AlertRole,
    title: Option<SharedString>,
    body: Option<SharedString>,
    children: Vec<AnyElement>,
    show_icon: bool,
    slim: bool,
}

impl Alert {
    pub fn new(variant: AlertVariant) -> Self {
        Self {
            variant,
            role: AlertRole::default(),
            title: None,
            body: None,
            children: Vec::new(),
            show_icon: true,
            slim: false,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<SharedString>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn role(mut self, role: AlertRole) -> Self {
        self.role = role;
        self
    }

    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    /// Single-line alert with a smaller icon and no title
    pub fn slim(mut self) -> Self {
        self.slim = true;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Alert {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = AlertStyle::resolve(self.variant);
        let slim = self.slim;
        let icon_size = if slim { px(24.0) } else { px(32.0) };

        h_flex()
            .w_full()
            .max_w(px(GRID_CONTAINER_MAX_WIDTH))
            .items_start()
            .gap_3()
            .pl_4()
            .pr_4()
            .py(if slim { px(8.0) } else { px(16.0) })
            .bg(style.bg)
            .border_l_8()
            .border_color(style.accent)
            .text_color(style.text)
            .when(self.show_icon, |el| {
                el.child(
                    Icon::new(style.glyph.icon_name())
                        .size(icon_size)
                        .text_color(style.text),
                )
            })
            .child(
                v_flex()
                    .flex_1()
                    .gap_2()
                    .when_some(self.title.filter(|_| !slim), |el, title| {
                        el.child(
                            div()
                                .text_size(px(Typography::TEXT_LG))
                                .font_weight(FontWeight::BOLD)
                                .line_height(gpui::relative(1.0))
                                .child(title),
                        )
                    })
                    .when_some(self.body, |el, body| {
                        el.child(
                            div()
                                .text_size(px(Typography::TEXT_SM))
                                .line_height(gpui::relative(Typography::LEADING_NORMAL))
                                .child(body),
                        )
                    })
                    .children(self.children),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_defaults_to_interrupting_role() {
        let alert = Alert::new(AlertVariant::Info);
        assert_eq!(alert.role, AlertRole::Alert);
        assert!(alert.show_icon);
        assert_eq!(Alert::new(AlertVariant::Success).role(AlertRole::Status).role, AlertRole::Status);
    }
}
