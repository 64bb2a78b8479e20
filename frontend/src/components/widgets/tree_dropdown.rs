use std::collections::BTreeSet;

use common::grouping::{TreeNode, TreeSelection};
use yew::html::Scope;
use yew::prelude::*;

pub enum Msg {
    Toggle,
    Expand(String),
    Pick(TreeSelection),
}

#[derive(Properties, PartialEq, Clone)]
pub struct GroupTreeDropdownProps {
    pub tree: Vec<TreeNode>,
    pub selection: TreeSelection,
    pub placeholder: AttrValue,
    pub on_select: Callback<TreeSelection>,
}

/// Dropdown listing outer groups with expandable inner groups. Picking a
/// node reports it and closes the menu.
pub struct GroupTreeDropdown {
    open: bool,
    expanded: BTreeSet<String>,
}

impl Component for GroupTreeDropdown {
    type Message = Msg;
    type Properties = GroupTreeDropdownProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            expanded: BTreeSet::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => self.open = !self.open,
            Msg::Expand(label) => {
                if !self.expanded.remove(&label) {
                    self.expanded.insert(label);
                }
            }
            Msg::Pick(selection) => {
                self.open = false;
                ctx.props().on_select.emit(selection);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let current = match props.selection.label() {
            "" => props.placeholder.to_string(),
            label => label.to_string(),
        };

        html! {
            <div class={classes!("tree-dropdown", self.open.then_some("open"))}>
                <button class="tree-dropdown-toggle" onclick={link.callback(|_| Msg::Toggle)}>
                    { current }
                </button>
                if self.open {
                    <ul class="tree-menu">
                        <li class="tree-item" onclick={link.callback(|_| Msg::Pick(TreeSelection::All))}>
                            { "All" }
                        </li>
                        { for props.tree.iter().map(|node| self.build_outer(node, &props.selection, link)) }
                    </ul>
                }
            </div>
        }
    }
}

impl GroupTreeDropdown {
    fn build_outer(&self, node: &TreeNode, selection: &TreeSelection, link: &Scope<Self>) -> Html {
        let expanded = self.expanded.contains(&node.label);
        let outer = node.label.clone();
        let pick_outer = {
            let outer = outer.clone();
            link.callback(move |_| Msg::Pick(TreeSelection::Outer(outer.clone())))
        };
        let toggle = {
            let outer = outer.clone();
            link.callback(move |event: MouseEvent| {
                event.stop_propagation();
                Msg::Expand(outer.clone())
            })
        };
        let active = matches!(selection, TreeSelection::Outer(o) if *o == outer);

        html! {
            <li class="tree-group">
                <div class={classes!("tree-item", active.then_some("active"))} onclick={pick_outer}>
                    <span class="tree-expander" onclick={toggle}>{ if expanded { "-" } else { "+" } }</span>
                    { node.label.clone() }
                </div>
                if expanded {
                    <ul class="tree-children">
                        { for node.children.iter().map(|child| {
                            let selection_for_child = TreeSelection::Inner {
                                outer: outer.clone(),
                                inner: child.label.clone(),
                            };
                            let active = *selection == selection_for_child;
                            html! {
                                <li
                                    class={classes!("tree-item", "tree-leaf", active.then_some("active"))}
                                    onclick={link.callback(move |_| Msg::Pick(selection_for_child.clone()))}
                                >
                                    { child.label.clone() }
                                </li>
                            }
                        }) }
                    </ul>
                }
            </li>
        }
    }
}
