use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Tallyview" }
            p { "Six decades of presidential results in four linked charts." }
            p {
                "Every year on the timeline carries its own dataset: who won each state, by how much, and what the national popular vote looked like."
            }

            ul { class: "page-home__features",
                li { "A stacked electoral-vote bar that clusters the closest races at the seam between the parties." }
                li { "A tile cartogram with one margin-coloured square per state and full results on hover." }
                li { "The national popular-vote split with the 50% line marked." }
            }
            p { class: "page-home__cta",
                "Open the dashboard and click a year to get started."
            }
        }
    }
}
