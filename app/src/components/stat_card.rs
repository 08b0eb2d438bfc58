use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    title: &'static str,
    value: String,
    #[props(default = false)]
    loading: bool,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div { class: "card text-center",
            h2 { class: "text-xl font-bold mb-2", "{props.title}" }
            p { class: "text-2xl font-extrabold font-mono",
                if props.loading { "Loading..." } else { "{props.value}" }
            }
        }
    }
}
