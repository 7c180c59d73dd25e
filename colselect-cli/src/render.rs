//! Text and JSON rendering of the two lists.

use colselect_lib::{ControlState, Lists, RenderedOption, Value, WidgetConfig, WidgetState};
use serde::Serialize;

#[derive(Serialize)]
struct ItemView<'a> {
    name: &'a str,
    value: &'a Value,
    disabled: bool,
    highlight: bool,
}

impl<'a> From<&RenderedOption<'a>> for ItemView<'a> {
    fn from(item: &RenderedOption<'a>) -> Self {
        Self {
            name: item.name(),
            value: item.value(),
            disabled: item.disabled,
            highlight: item.highlight,
        }
    }
}

#[derive(Serialize)]
struct WidgetView<'a> {
    available: Vec<ItemView<'a>>,
    selected: Vec<ItemView<'a>>,
    selection: &'a [Value],
    controls: ControlState,
}

pub fn to_json(lists: &Lists<'_>, state: &WidgetState, controls: ControlState) -> serde_json::Result<String> {
    let view = WidgetView {
        available: lists.available.iter().map(ItemView::from).collect(),
        selected: lists.selected.iter().map(ItemView::from).collect(),
        selection: &state.selection,
        controls,
    };
    serde_json::to_string_pretty(&view)
}

pub fn to_text(
    lists: &Lists<'_>,
    state: &WidgetState,
    controls: ControlState,
    config: &WidgetConfig,
) -> String {
    let mut out = String::new();

    section(&mut out, "Available", &lists.available, &state.filter_available, config);
    section(&mut out, "Selected", &lists.selected, &state.filter_selected, config);

    if controls.controls_visible {
        out.push_str(&format!(
            "[{}] {}  [{}] {}\n",
            toggle(controls.select_all_enabled),
            config.labels.select_all,
            toggle(controls.deselect_all_enabled),
            config.labels.deselect_all,
        ));
    }
    if controls.widget_disabled {
        out.push_str("(disabled)\n");
    }
    out
}

fn section(out: &mut String, title: &str, items: &[RenderedOption<'_>], filter: &str, config: &WidgetConfig) {
    if config.searchable && !filter.is_empty() {
        out.push_str(&format!("{} (filter: {:?})\n", title, filter));
    } else {
        out.push_str(&format!("{}\n", title));
    }

    if items.is_empty() {
        out.push_str("  -\n");
    }
    for item in items {
        let marker = if item.highlight { '*' } else { ' ' };
        let mut line = format!("  {}{:>6}  {}", marker, item.value().to_string(), item.name());
        if item.disabled {
            line.push_str("  (disabled)");
        }
        out.push_str(&line);
        out.push('\n');
    }
}

fn toggle(enabled: bool) -> &'static str {
    if enabled { "x" } else { " " }
}
