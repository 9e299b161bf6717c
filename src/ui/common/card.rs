use leptos::prelude::*;

/// Plain surface card
#[component]
pub fn Card(
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            {children()}
        </div>
    }
}

/// Card header with title and optional description
#[component]
pub fn CardHeader(
    title: String,
    #[prop(optional)]
    description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <h3 class="text-xl font-semibold">{title}</h3>
            {description.map(|d| view! { <p class="text-sm text-muted">{d}</p> })}
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

/// Frosted-glass card used over gradient backgrounds
#[component]
pub fn GlassCard(
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Lift slightly on hover
    #[prop(default = true)]
    hover: bool,
) -> impl IntoView {
    let classes = if hover {
        format!("glass-card glass-card-hover {}", class)
    } else {
        format!("glass-card {}", class)
    };

    view! { <div class=classes>{children()}</div> }
}
