//! Table Component
//!
//! Bordered USWDS data table with an optional caption, striped body and
//! footer row.

use gpui::{
    App, Div, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
    div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::theme::{Typography, UswdsColors};

/// Column width specification
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space
    #[default]
    Flex,
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub label: SharedString,
    pub width: ColumnWidth,
}

impl Column {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            width: ColumnWidth::Flex,
        }
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }
}

/// Background of body row `index` (0-based)
fn row_background(index: usize, striped: bool) -> gpui::Rgba {
    if striped && index % 2 == 1 {
        UswdsColors::gray_5()
    } else {
        UswdsColors::white()
    }
}

#[derive(IntoElement)]
pub struct Table {
    caption: Option<SharedString>,
    columns: Vec<Column>,
    rows: Vec<Vec<SharedString>>,
    footer: Option<Vec<SharedString>>,
    striped: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            caption: None,
            columns,
            rows: Vec::new(),
            footer: None,
            striped: false,
        }
    }

    pub fn caption(mut self, caption: impl Into<SharedString>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn footer<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        self.footer = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    fn cell(column: &Column, first: bool, text: SharedString) -> Div {
        div()
            .map(|el| match column.width {
                ColumnWidth::Fixed(width) => el.w(px(width)).flex_none(),
                ColumnWidth::Flex => el.flex_1(),
            })
            .px_4()
            .py_2()
            .border_1()
            .border_t_0()
            .when(!first, |el| el.border_l_0())
            .border_color(UswdsColors::ink())
            .child(text)
    }

    fn render_row(columns: &[Column], cells: Vec<SharedString>) -> Div {
        let mut cells = cells.into_iter();
        h_flex().w_full().children(
            columns
                .iter()
                .enumerate()
                .map(|(i, column)| Self::cell(column, i == 0, cells.next().unwrap_or_default()))
                .collect::<Vec<_>>(),
        )
    }
}

impl RenderOnce for Table {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let header = h_flex().w_full().children(
            self.columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    Self::cell(column, i == 0, column.label.clone())
                        .border_t_1()
                        .bg(UswdsColors::gray_10())
                        .font_weight(FontWeight::BOLD)
                })
                .collect::<Vec<_>>(),
        );

        let striped = self.striped;
        let body: Vec<_> = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(index, cells)| {
                div()
                    .w_full()
                    .bg(row_background(index, striped))
                    .child(Self::render_row(&self.columns, cells))
            })
            .collect();

        let footer = self.footer.map(|cells| {
            div()
                .w_full()
                .bg(UswdsColors::gray_5())
                .font_weight(FontWeight::BOLD)
                .child(Self::render_row(&self.columns, cells))
        });

        v_flex()
            .w_full()
            .text_size(px(Typography::TEXT_SM))
            .text_color(UswdsColors::ink())
            .when_some(self.caption, |el, caption| {
                el.child(
                    div()
                        .pb_2()
                        .font_weight(FontWeight::BOLD)
                        .text_size(px(Typography::TEXT_MD))
                        .child(caption),
                )
            })
            .child(header)
            .children(body)
            .children(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_striped_rows_alternate_from_second_row() {
        assert_eq!(row_background(0, true), UswdsColors::white());
        assert_eq!(row_background(1, true), UswdsColors::gray_5());
        assert_eq!(row_background(1, false), UswdsColors::white());
    }

    #[test]
    fn test_builder_collects_rows_and_footer() {
        let table = Table::new(vec![Column::new("Name"), Column::new("Year").fixed_width(80.0)])
            .caption("Bordered table")
            .row(["Declaration of Independence", "1776"])
            .row(["Bill of Rights", "1791"])
            .footer(["Total", "2"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.columns[1].width, ColumnWidth::Fixed(80.0));
        assert!(table.footer.is_some());
    }
}
