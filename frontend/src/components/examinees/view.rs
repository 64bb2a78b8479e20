use common::action::Action;
use common::format::{format_optional, format_timestamp};
use common::model::{Submission, SubmissionField};
use common::screen::{PageView, ScreenView};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ExamineeList, Header};
use crate::components::widgets::{
    empty_state, error_panel, loading_indicator, search_filter, select_filter, PaginationFooter,
};
use crate::helpers::{elapsed_label, progress_label, submission_badge};
use crate::tops_sheet::student_details_sheet;

pub fn view(component: &ExamineeList, ctx: &Context<ExamineeList>) -> Html {
    let link = ctx.link();
    html! {
        <section class="screen examinees">
            { build_header(component, ctx) }
            { build_body(component, link) }
            { student_details_sheet(component.details.state(), link.callback(|_| Msg::CloseDetails)) }
        </section>
    }
}

fn build_header(component: &ExamineeList, ctx: &Context<ExamineeList>) -> Html {
    let (title, subtitle) = match &component.header {
        Header::Loading => ("Loading assessment...".to_string(), String::new()),
        Header::Found(assessment) => (
            assessment.name.clone(),
            format!("{} - {} - {}", assessment.course, assessment.program, assessment.area),
        ),
        Header::Missing => (
            "Unknown assessment".to_string(),
            format!("No assessment with id {}", ctx.props().assessment_id),
        ),
    };
    html! {
        <header class="screen-header">
            <button class="button" onclick={ctx.link().callback(|_| Msg::Back)}>{ "Back" }</button>
            <div class="screen-title">
                <h1>{ title }</h1>
                <p class="muted">{ subtitle }</p>
            </div>
        </header>
    }
}

fn build_body(component: &ExamineeList, link: &Scope<ExamineeList>) -> Html {
    match component.screen.view() {
        ScreenView::Idle | ScreenView::Loading => loading_indicator("Loading examinees..."),
        ScreenView::Failed(message) => error_panel(message, link.callback(|_| Msg::Load)),
        ScreenView::NoData => empty_state("No examinees found for this assessment."),
        ScreenView::Rows(page) => html! {
            <>
                { build_filters(component, link) }
                { build_table(component, link, page) }
            </>
        },
    }
}

fn build_filters(component: &ExamineeList, link: &Scope<ExamineeList>) -> Html {
    let screen = &component.screen;
    let criteria = screen.criteria();
    let filter = |id: &'static str, label: &'static str, field: SubmissionField| {
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
            { search_filter(
                "filter-examinee",
                "Examinee",
                "Search by name or username",
                criteria.get(SubmissionField::Examinee),
                link.callback(|value| Msg::SetFilter(SubmissionField::Examinee, value)),
            ) }
            { filter("filter-area", "Area", SubmissionField::Area) }
            { filter("filter-group", "Group", SubmissionField::Group) }
            { filter("filter-status", "Status", SubmissionField::Status) }
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

fn build_table(component: &ExamineeList, link: &Scope<ExamineeList>, page: PageView<'_, Submission>) -> Html {
    if page.no_matches {
        return empty_state("No examinees match the current filters.");
    }
    let pagination = component.screen.pagination();
    html! {
        <>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Examinee" }</th>
                        <th>{ "Area" }</th>
                        <th>{ "Group" }</th>
                        <th>{ "Login" }</th>
                        <th>{ "Start" }</th>
                        <th>{ "Progress" }</th>
                        <th>{ "Elapsed" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for page.rows.iter().map(|submission| build_row(component, link, submission)) }
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

fn build_row(component: &ExamineeList, link: &Scope<ExamineeList>, submission: &Submission) -> Html {
    let busy = component.screen.is_busy(&submission.id);
    let selected = component.screen.selected_id() == Some(submission.id.as_str());
    let details = {
        let id = submission.id.clone();
        link.callback(move |_| Msg::ShowDetails(id.clone()))
    };

    html! {
        <tr key={submission.id.clone()} class={classes!(busy.then_some("busy"), selected.then_some("selected"))}>
            <td class="cell-name">
                <button class="link-button" onclick={details}>{ submission.full_name.clone() }</button>
                <span class="muted">{ submission.username.clone() }</span>
            </td>
            <td>{ submission.area.clone() }</td>
            <td>{ submission.group.clone() }</td>
            <td>{ format_optional(submission.login.as_ref(), format_timestamp) }</td>
            <td>{ format_optional(submission.start.as_ref(), format_timestamp) }</td>
            <td>{ progress_label(submission.questions_synced) }</td>
            <td>{ elapsed_label(submission.time_elapsed) }</td>
            <td><span class={submission_badge(submission.status)}>{ submission.status.as_str() }</span></td>
            <td class="cell-actions">
                { for Action::EXAMINEE.iter().map(|&action| {
                    let id = submission.id.clone();
                    html! {
                        <button
                            class="button"
                            disabled={busy}
                            onclick={link.callback(move |_| Msg::Act(action, id.clone()))}
                        >
                            { action.label() }
                        </button>
                    }
                }) }
                if busy {
                    <span class="spinner small"></span>
                }
            </td>
        </tr>
    }
}
