use common::format::format_timestamp;
use common::grouping::{build_tree, count_groups, TreeSelection};
use common::model::{Assessment, AssessmentField, AssessmentStatus};
use common::screen::{PageView, ScreenView};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AssessmentList, ViewMode};
use crate::components::widgets::{
    empty_state, error_panel, loading_indicator, select_filter, GroupTreeDropdown, GroupedView,
    PaginationFooter,
};
use crate::helpers::assessment_badge;

pub fn view(component: &AssessmentList, ctx: &Context<AssessmentList>) -> Html {
    let link = ctx.link();
    html! {
        <section class="screen assessments">
            <header class="screen-header">
                <h1>{ "Assessments" }</h1>
                { build_toolbar(component, link) }
            </header>
            { build_body(component, link) }
        </section>
    }
}

fn build_toolbar(component: &AssessmentList, link: &Scope<AssessmentList>) -> Html {
    let has_rows = matches!(component.screen.view(), ScreenView::Rows(_));
    let mode_button = |label: &'static str, mode: ViewMode| {
        html! {
            <button
                class={classes!("toggle", (component.view_mode == mode).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetViewMode(mode))}
            >
                { label }
            </button>
        }
    };
    html! {
        <div class="screen-actions">
            <div class="view-toggle">
                { mode_button("Table", ViewMode::Table) }
                { mode_button("Grouped", ViewMode::Grouped) }
            </div>
            <button
                class="button button-primary"
                disabled={!has_rows || component.view_mode == ViewMode::Grouped}
                onclick={link.callback(|_| Msg::SyncAll)}
            >
                { "Sync all" }
            </button>
        </div>
    }
}

fn build_body(component: &AssessmentList, link: &Scope<AssessmentList>) -> Html {
    match component.screen.view() {
        ScreenView::Idle | ScreenView::Loading => loading_indicator("Loading assessments..."),
        ScreenView::Failed(message) => error_panel(message, link.callback(|_| Msg::Load)),
        ScreenView::NoData => empty_state("No assessments found."),
        ScreenView::Rows(page) => match component.view_mode {
            ViewMode::Grouped => html! {
                <GroupedView
                    groups={count_groups(component.screen.items(), AssessmentField::Area, AssessmentField::Program)}
                    on_open={link.callback(Msg::OpenGroup)}
                />
            },
            ViewMode::Table => html! {
                <>
                    { build_filters(component, link) }
                    { build_table(component, link, page) }
                </>
            },
        },
    }
}

fn build_filters(component: &AssessmentList, link: &Scope<AssessmentList>) -> Html {
    let screen = &component.screen;
    let criteria = screen.criteria();
    let filter = |id: &'static str, label: &'static str, field: AssessmentField| {
        select_filter(
            id,
            label,
            screen.options(field),
            criteria.get(field),
            link.callback(move |value| Msg::SetFilter(field, value)),
        )
    };

    html! {
        <div class="filters">
            <GroupTreeDropdown
                tree={build_tree(screen.items(), AssessmentField::Area, AssessmentField::Program)}
                selection={TreeSelection::from_criteria(criteria, AssessmentField::Area, AssessmentField::Program)}
                placeholder="All areas and programs"
                on_select={link.callback(Msg::SelectGroup)}
            />
            { filter("filter-area", "Area", AssessmentField::Area) }
            { filter("filter-program", "Program", AssessmentField::Program) }
            { filter("filter-course", "Course", AssessmentField::Course) }
            { filter("filter-status", "Status", AssessmentField::Status) }
            <button
                class="button"
                disabled={criteria.is_empty()}
                onclick={link.callback(|_| Msg::ClearFilters)}
            >
                { "Clear filters" }
            </button>
        </div>
    }
}

fn build_table(component: &AssessmentList, link: &Scope<AssessmentList>, page: PageView<'_, Assessment>) -> Html {
    if page.no_matches {
        return empty_state("No assessments match the current filters.");
    }
    let pagination = component.screen.pagination();
    html! {
        <>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Area" }</th>
                        <th>{ "Program" }</th>
                        <th>{ "Course" }</th>
                        <th>{ "Start" }</th>
                        <th>{ "End" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for page.rows.iter().map(|assessment| build_row(component, link, assessment)) }
                </tbody>
            </table>
            <PaginationFooter
                window={page.window}
                page={page.page}
                last_page={page.last_page}
                has_previous={page.has_previous}
                has_next={page.has_next}
                page_size={pagination.page_size()}
                offered={pagination.offered().to_vec()}
                on_page={link.callback(Msg::SetPage)}
                on_page_size={link.callback(Msg::SetPageSize)}
            />
        </>
    }
}

fn build_row(component: &AssessmentList, link: &Scope<AssessmentList>, assessment: &Assessment) -> Html {
    let busy = component.screen.is_busy(&assessment.id);
    let synced = assessment.status == AssessmentStatus::Synced;
    let sync = {
        let id = assessment.id.clone();
        link.callback(move |_| Msg::Sync(id.clone()))
    };
    let track = {
        let id = assessment.id.clone();
        link.callback(move |_| Msg::Track(id.clone()))
    };

    html! {
        <tr key={assessment.id.clone()} class={classes!(busy.then_some("busy"))}>
            <td class="cell-name">{ assessment.name.clone() }</td>
            <td>{ assessment.area.clone() }</td>
            <td>{ assessment.program.clone() }</td>
            <td>{ assessment.course.clone() }</td>
            <td>{ format_timestamp(&assessment.start_date) }</td>
            <td>{ format_timestamp(&assessment.end_date) }</td>
            <td><span class={assessment_badge(assessment.status)}>{ assessment.status.as_str() }</span></td>
            <td class="cell-actions">
                <button class="button" onclick={track}>{ "Track" }</button>
                <button class="button button-primary" disabled={busy || synced} onclick={sync}>
                    { if busy { "Syncing..." } else { "Sync" } }
                </button>
            </td>
        </tr>
    }
}
