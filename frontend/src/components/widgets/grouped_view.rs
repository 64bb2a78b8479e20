use std::collections::BTreeSet;

use common::grouping::{GroupCount, TreeSelection};
use yew::prelude::*;

pub enum Msg {
    Toggle(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct GroupedViewProps {
    pub groups: Vec<GroupCount>,
    pub on_open: Callback<TreeSelection>,
}

/// Alternate rendering of a list as collapsible groups. Opening a group
/// hands its selection back to the screen, which filters the table by it.
pub struct GroupedView {
    expanded: BTreeSet<String>,
}

impl Component for GroupedView {
    type Message = Msg;
    type Properties = GroupedViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            expanded: BTreeSet::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Toggle(label) = msg;
        if !self.expanded.remove(&label) {
            self.expanded.insert(label);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="grouped-view">
                { for props.groups.iter().map(|group| self.build_group(group, ctx)) }
            </div>
        }
    }
}

impl GroupedView {
    fn build_group(&self, group: &GroupCount, ctx: &Context<Self>) -> Html {
        let expanded = self.expanded.contains(&group.label);
        let toggle = {
            let label = group.label.clone();
            ctx.link().callback(move |_| Msg::Toggle(label.clone()))
        };
        let open_group = {
            let on_open = ctx.props().on_open.clone();
            let label = group.label.clone();
            Callback::from(move |_: MouseEvent| on_open.emit(TreeSelection::Outer(label.clone())))
        };

        html! {
            <section class={classes!("group", expanded.then_some("expanded"))}>
                <header class="group-header">
                    <button class="group-toggle" onclick={toggle}>{ if expanded { "-" } else { "+" } }</button>
                    <span class="group-label">{ group.label.clone() }</span>
                    <span class="group-count">{ group.count.to_string() }</span>
                    <button class="link-button" onclick={open_group}>{ "View" }</button>
                </header>
                if expanded {
                    <ul class="group-children">
                        { for group.children.iter().map(|child| {
                            let on_open = ctx.props().on_open.clone();
                            let selection = TreeSelection::Inner {
                                outer: group.label.clone(),
                                inner: child.label.clone(),
                            };
                            html! {
                                <li class="group-child">
                                    <span class="group-label">{ child.label.clone() }</span>
                                    <span class="group-count">{ child.count.to_string() }</span>
                                    <button
                                        class="link-button"
                                        onclick={Callback::from(move |_: MouseEvent| on_open.emit(selection.clone()))}
                                    >
                                        { "View" }
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </section>
        }
    }
}
