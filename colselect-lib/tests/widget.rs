use colselect_lib::{
    Action, CaseSensitiveFilter, ColumnSelect, FuzzyFilter, Limit, SelectOption, Side, Value,
    WidgetConfig, WidgetState,
};

fn catalog() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Foo", 0),
        SelectOption::new("Bar", 1),
        SelectOption::new("Baz", 2),
        SelectOption::new("Qux", 3),
        SelectOption::new("Quux", 4),
    ]
}

fn values(raw: &[i64]) -> Vec<Value> {
    raw.iter().map(|&n| Value::from(n)).collect()
}

fn names(list: &[colselect_lib::RenderedOption<'_>]) -> Vec<String> {
    list.iter().map(|o| o.name().to_string()).collect()
}

#[test]
fn test_lists_split_by_selection() {
    let catalog = vec![SelectOption::new("Foo", "foo"), SelectOption::new("Bar", "bar")];
    let widget = ColumnSelect::default();
    let lists = widget.lists(&catalog, &WidgetState::with_selection(["bar"]));
    assert_eq!(names(&lists.available), vec!["Foo"]);
    assert_eq!(names(&lists.selected), vec!["Bar"]);
}

#[test]
fn test_filter_text_ignored_unless_searchable() {
    let catalog = catalog();
    let state = WidgetState::new().with_filter(Side::Available, "ux");

    let plain = ColumnSelect::default();
    assert_eq!(plain.available(&catalog, &state).len(), 5);

    let searchable = ColumnSelect::new(WidgetConfig::new().searchable());
    assert_eq!(names(&searchable.available(&catalog, &state)), vec!["Qux", "Quux"]);
}

#[test]
fn test_sides_filter_independently() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().searchable());
    let state = WidgetState::with_selection([0, 3])
        .with_filter(Side::Available, "ba")
        .with_filter(Side::Selected, "fo");
    let lists = widget.lists(&catalog, &state);
    assert_eq!(names(&lists.available), vec!["Bar", "Baz"]);
    assert_eq!(names(&lists.selected), vec!["Foo"]);
}

#[test]
fn test_select_all_through_filter() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().searchable().show_controls());
    let state = WidgetState::with_selection([0]).with_filter(Side::Available, "ux");
    let next = widget.apply(&catalog, &state, Action::SelectAll);
    assert_eq!(next.selection, values(&[0, 3, 4]));
    assert_eq!(next.filter_available, "ux");
}

#[test]
fn test_deselect_all_through_filter() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().searchable().show_controls());
    let state = WidgetState::with_selection([0, 1, 2, 3, 4]).with_filter(Side::Selected, "ux");
    let next = widget.apply(&catalog, &state, Action::DeselectAll);
    assert_eq!(next.selection, values(&[0, 1, 2]));
}

#[test]
fn test_select_all_with_limit() {
    let mut catalog = catalog();
    catalog[1].disabled = true;
    let widget = ColumnSelect::new(WidgetConfig::new().limit(Limit::new(3)));
    let next = widget.apply(&catalog, &WidgetState::with_selection([4]), Action::SelectAll);
    assert_eq!(next.selection, values(&[0, 2, 4]));
}

#[test]
fn test_disabled_widget_ignores_actions() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().searchable().disabled());
    let state = WidgetState::with_selection([1]).with_filter(Side::Available, "b");

    let actions = [
        Action::SelectOption(Value::from(0)),
        Action::DeselectOption(Value::from(1)),
        Action::SelectAll,
        Action::DeselectAll,
        Action::SetFilter(Side::Selected, "x".to_string()),
        Action::ClearFilter(Side::Available),
    ];
    for action in actions {
        assert_eq!(widget.apply(&catalog, &state, action), state);
    }
}

#[test]
fn test_click_on_disabled_option() {
    let catalog = vec![SelectOption::new("Foo", 0).disabled()];
    let widget = ColumnSelect::default();
    let state = WidgetState::new();

    let available = widget.available(&catalog, &state);
    assert!(available[0].disabled);
    assert!(!widget.controls(&catalog, &state).item_clickable(&available[0]));

    let next = widget.apply(&catalog, &state, Action::SelectOption(Value::from(0)));
    assert!(next.selection.is_empty());
}

#[test]
fn test_limit_reached_blocks_clicks() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().limit(Limit::new(3)));
    let state = WidgetState::with_selection([0, 1, 2]);

    let available = widget.available(&catalog, &state);
    assert_eq!(names(&available), vec!["Qux", "Quux"]);
    assert!(available.iter().all(|o| o.disabled));

    let next = widget.apply(&catalog, &state, Action::SelectOption(Value::from(3)));
    assert_eq!(next, state);

    let next = widget.apply(&catalog, &state, Action::SelectAll);
    assert_eq!(next, state);
}

#[test]
fn test_clear_filter() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().searchable());
    let state = widget.apply(
        &catalog,
        &WidgetState::new(),
        Action::SetFilter(Side::Available, "ux".to_string()),
    );
    assert_eq!(state.filter(Side::Available), "ux");

    let state = widget.apply(&catalog, &state, Action::ClearFilter(Side::Available));
    assert_eq!(state.filter(Side::Available), "");
}

#[test]
fn test_clear_filter_requires_clearable() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().searchable().clearable(false));
    let state = WidgetState::new().with_filter(Side::Selected, "ux");
    let next = widget.apply(&catalog, &state, Action::ClearFilter(Side::Selected));
    assert_eq!(next.filter(Side::Selected), "ux");
}

#[test]
fn test_adding_and_removing_items_manually() {
    let catalog = vec![
        SelectOption::new("Foo", 0),
        SelectOption::new("Bar", 1),
        SelectOption::new("Baz", 2),
    ];
    let widget = ColumnSelect::default();

    let state = WidgetState::with_selection([0]);
    let first = widget.available(&catalog, &state)[0].value().clone();
    let state = widget.apply(&catalog, &state, Action::SelectOption(first));
    assert_eq!(state.selection, values(&[0, 1]));

    let state = widget.apply(&catalog, &state, Action::DeselectOption(Value::from(0)));
    assert_eq!(state.selection, values(&[1]));
}

#[test]
fn test_reselect_restores_catalog_order() {
    let catalog = catalog();
    let widget = ColumnSelect::default();
    let mut state = WidgetState::new();
    for id in [3, 0, 1] {
        state = widget.apply(&catalog, &state, Action::SelectOption(Value::from(id)));
    }
    assert_eq!(state.selection, values(&[3, 0, 1]));
    assert_eq!(names(&widget.selected(&catalog, &state)), vec!["Foo", "Bar", "Qux"]);
}

#[test]
fn test_highlight_only_on_available_side() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().highlight([1, 2]));
    let lists = widget.lists(&catalog, &WidgetState::with_selection([2]));
    let highlighted: Vec<_> = lists.available.iter().filter(|o| o.highlight).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].name(), "Bar");
    assert!(lists.selected.iter().all(|o| !o.highlight));
}

#[test]
fn test_custom_predicates() {
    let catalog = catalog();
    let state = WidgetState::new().with_filter(Side::Available, "qx");

    let fuzzy = ColumnSelect::with_predicate(WidgetConfig::new().searchable(), FuzzyFilter::new());
    assert_eq!(names(&fuzzy.available(&catalog, &state)), vec!["Qux", "Quux"]);

    let substring = ColumnSelect::new(WidgetConfig::new().searchable());
    assert!(substring.available(&catalog, &state).is_empty());

    let state = WidgetState::new().with_filter(Side::Available, "qu");
    let exact = ColumnSelect::with_predicate(WidgetConfig::new().searchable(), CaseSensitiveFilter);
    assert!(exact.available(&catalog, &state).is_empty());

    let by_value = ColumnSelect::with_predicate(
        WidgetConfig::new().searchable(),
        |option: &SelectOption, text: &str| option.value.to_string() == text,
    );
    let state = WidgetState::new().with_filter(Side::Available, "2");
    assert_eq!(names(&by_value.available(&catalog, &state)), vec!["Baz"]);
}

#[test]
fn test_stale_selection_is_invisible() {
    let catalog = catalog();
    let widget = ColumnSelect::default();
    let state = WidgetState::with_selection([0, 42]);
    let lists = widget.lists(&catalog, &state);
    assert_eq!(names(&lists.selected), vec!["Foo"]);
    assert_eq!(lists.available.len(), 4);
}

#[test]
fn test_select_all_with_stale_selection() {
    let catalog = vec![
        SelectOption::new("Foo", 0),
        SelectOption::new("Bar", 1),
        SelectOption::new("Baz", 2),
    ];
    let widget = ColumnSelect::new(WidgetConfig::new().show_controls());
    let state = WidgetState::with_selection([0, 97, 98, 99]);

    assert_eq!(names(&widget.available(&catalog, &state)), vec!["Bar", "Baz"]);
    assert!(widget.controls(&catalog, &state).select_all_enabled);

    let next = widget.apply(&catalog, &state, Action::SelectAll);
    assert_eq!(next.selection, values(&[0, 1, 2, 97, 98, 99]));
}

#[test]
fn test_single_side_matches_lists() {
    let catalog = catalog();
    let widget = ColumnSelect::new(WidgetConfig::new().searchable().limit(Limit::new(2)).highlight([3]));
    let state = WidgetState::with_selection([1, 4])
        .with_filter(Side::Available, "o")
        .with_filter(Side::Selected, "u");

    let lists = widget.lists(&catalog, &state);
    assert_eq!(widget.available(&catalog, &state), lists.available);
    assert_eq!(widget.selected(&catalog, &state), lists.selected);
    assert_eq!(names(&lists.available), vec!["Foo"]);
    assert_eq!(names(&lists.selected), vec!["Quux"]);
}

#[test]
fn test_select_all_sorts_fractional_values() {
    let catalog = vec![
        SelectOption::new("Two", 2),
        SelectOption::new("One and a half", 1.5),
        SelectOption::new("One", 1),
    ];
    let widget = ColumnSelect::default();
    let next = widget.apply(&catalog, &WidgetState::new(), Action::SelectAll);
    assert_eq!(
        next.selection,
        vec![Value::from(1), Value::from(1.5), Value::from(2)]
    );

    let next = widget.apply(&catalog, &next, Action::DeselectOption(Value::parse("1.5")));
    assert_eq!(next.selection, values(&[1, 2]));
}
