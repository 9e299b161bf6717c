use std::collections::HashSet;

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Flip one item; other open items are left alone
fn toggle_item(open: &mut HashSet<usize>, index: usize) {
    if !open.remove(&index) {
        open.insert(index);
    }
}

/// Question/answer list where any number of items can be open at once
#[component]
pub fn Accordion(
    /// (question, answer) pairs
    items: Vec<(&'static str, &'static str)>,
    /// Items open on first render
    #[prop(optional)]
    initially_open: Vec<usize>,
) -> impl IntoView {
    let open = RwSignal::new(initially_open.into_iter().collect::<HashSet<usize>>());

    view! {
        <div class="space-y-4">
            {items.into_iter().enumerate().map(|(index, (question, answer))| {
                let is_open = Signal::derive(move || open.with(|set| set.contains(&index)));
                view! {
                    <AccordionItem
                        question=question
                        answer=answer
                        is_open=is_open
                        on_toggle=Callback::new(move |_| open.update(|set| toggle_item(set, index)))
                    />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn AccordionItem(
    question: &'static str,
    answer: &'static str,
    is_open: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate glass-card overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-white/5 transition-colors"
                on:click=move |_| on_toggle.run(())
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-semibold">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class=("max-h-0", move || !is_open.get())
                class=("max-h-96", move || is_open.get())
            >
                <div class="px-6 pb-4 text-muted leading-relaxed">
                    {answer}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_toggle_independently() {
        let mut open = HashSet::new();
        toggle_item(&mut open, 0);
        toggle_item(&mut open, 2);
        assert!(open.contains(&0) && open.contains(&2));

        toggle_item(&mut open, 0);
        assert!(!open.contains(&0));
        assert!(open.contains(&2));
    }
}
