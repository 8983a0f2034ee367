//! Card container and its padded content area.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="bg-slate-900 border-slate-800">
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("rounded-lg border shadow-sm {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_merges_caller_classes_and_forwards_children() {
        let html = Owner::new().with(|| {
            view! {
                <Card class="bg-slate-900">
                    <CardContent class="space-y-2">
                        <p>"inner"</p>
                    </CardContent>
                </Card>
            }
            .to_html()
        });

        assert!(html.contains(r#"class="rounded-lg border shadow-sm bg-slate-900""#));
        assert!(html.contains(r#"class="p-6 space-y-2""#));
        assert!(html.contains("<p>inner</p>"));
    }
}
