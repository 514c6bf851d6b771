use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::charts::{
    ElectoralVoteBar, TileMap, VotePercentageBar, YearTimeline, ELECTORAL_BAR, PERCENTAGE_BAR,
};
use crate::core::color::MarginColorScale;
use crate::core::controller::{build_year_view, RequestToken, YearSelection, YearView};
use crate::core::data;
use crate::core::platform;
use crate::core::results::StateRow;

/// The dashboard: year timeline on top, then the electoral-vote bar, the
/// popular-vote bar, and the tile cartogram, always updated in that order
/// from one derived [`YearView`].
#[component]
pub fn Dashboard() -> Element {
    let selection = use_signal(YearSelection::new);
    let current = use_signal(|| Option::<YearView>::None);
    let fetch_error = use_signal(|| Option::<String>::None);
    // One scale instance for the whole dashboard; every chart gets a copy of
    // the same thresholds so colours agree across renderers.
    let color_scale = use_hook(MarginColorScale::new);
    let years = use_resource(data::load_year_index);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let controller = {
        let selection_ref = selection.clone();
        let current_ref = current.clone();
        let error_ref = fetch_error.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut selection_signal = selection_ref.clone();
            let mut current_signal = current_ref.clone();
            let mut error_signal = error_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        DashboardEvent::SelectYear(year) => {
                            let token = selection_signal.with_mut(|s| s.begin(year));
                            error_signal.set(None);
                            info!(year, token, "loading election year");
                            queue_fetch(sender_slot.clone(), year, token);
                        }
                        DashboardEvent::DatasetReady { token, rows } => {
                            let year = selection_signal.with(|s| {
                                s.is_current(token).then(|| s.selected_year()).flatten()
                            });
                            let Some(year) = year else {
                                info!(token, "discarding dataset for a superseded selection");
                                continue;
                            };

                            match build_year_view(
                                year,
                                &rows,
                                ELECTORAL_BAR.frame(),
                                PERCENTAGE_BAR.frame(),
                            ) {
                                Ok(view) => {
                                    selection_signal.with_mut(|s| s.complete(token));
                                    info!(year, states = view.states.len(), "year displayed");
                                    current_signal.set(Some(view));
                                }
                                Err(err) => {
                                    // A tile miss poisons the whole year: the
                                    // charts keep whatever they showed before.
                                    let prior = current_signal.with(|v| v.as_ref().map(|v| v.year));
                                    selection_signal.with_mut(|s| s.fail(token, prior));
                                    error!(year, %err, "dataset rejected; keeping previous charts");
                                    error_signal.set(Some(format!("{year}: {err}")));
                                }
                            }
                        }
                        DashboardEvent::FetchFailed {
                            token,
                            year,
                            message,
                        } => {
                            let prior = current_signal.with(|v| v.as_ref().map(|v| v.year));
                            if selection_signal.with_mut(|s| s.fail(token, prior)) {
                                warn!(year, %message, "year fetch failed");
                                error_signal.set(Some(format!("{year}: {message}")));
                            } else {
                                info!(token, "ignoring failure of a superseded fetch");
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(controller.tx());

    let selected = selection.with(|s| s.selected_year());
    let view = current();
    let error_message = fetch_error();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "United States presidential results" }
            p { class: "page-dashboard__intro",
                "Pick an election year to redraw the electoral-vote bar, the national popular vote, and the state cartogram."
            }

            {match &*years.read_unchecked() {
                Some(Ok(entries)) => rsx! {
                    YearTimeline {
                        years: entries.clone(),
                        selected,
                        failure: error_message.clone(),
                        on_select: move |year| controller.send(DashboardEvent::SelectYear(year)),
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "page-dashboard__error", "⚠️ Couldn't load the election index: {err}" }
                },
                None => rsx! {
                    p { class: "page-dashboard__placeholder", "Loading election years…" }
                },
            }}

            if let Some(view) = view {
                ElectoralVoteBar { view: view.clone(), scale: color_scale.clone() }
                VotePercentageBar { view: view.clone() }
                TileMap { view, scale: color_scale }
            } else {
                p { class: "page-dashboard__placeholder",
                    "Select a year on the timeline to load its results."
                }
            }
        }
    }
}

fn queue_fetch(
    sender_slot: Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>>,
    year: u16,
    token: RequestToken,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let event = match data::load_year(year).await {
                Ok(rows) => DashboardEvent::DatasetReady { token, rows },
                Err(err) => DashboardEvent::FetchFailed {
                    token,
                    year,
                    message: err.to_string(),
                },
            };
            let _ = sender.unbounded_send(event);
        });
    }
}

#[derive(Debug, Clone)]
enum DashboardEvent {
    SelectYear(u16),
    DatasetReady {
        token: RequestToken,
        rows: Vec<StateRow>,
    },
    FetchFailed {
        token: RequestToken,
        year: u16,
        message: String,
    },
}
