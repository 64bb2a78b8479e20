use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

/// Dropdown over `options` with a leading "all" entry whose value is empty.
pub fn select_filter(
    id: &'static str,
    label: &'static str,
    options: &[String],
    selected: &str,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        on_change.emit(select.value());
    });
    html! {
        <label class="filter" for={id}>
            <span class="filter-label">{ label }</span>
            <select {id} {onchange}>
                <option value="" selected={selected.is_empty()}>{ "All" }</option>
                { for options.iter().map(|option| html! {
                    <option value={option.clone()} selected={option == selected}>{ option.clone() }</option>
                }) }
            </select>
        </label>
    }
}

pub fn search_filter(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    on_input: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        on_input.emit(input.value());
    });
    html! {
        <label class="filter filter-search" for={id}>
            <span class="filter-label">{ label }</span>
            <input {id} type="search" {placeholder} value={value.to_string()} {oninput} />
        </label>
    }
}
