use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Interval;
use time::OffsetDateTime;
use tracing::{error, warn};
use shared::{CandidateId, Error, LoadReport, LoadState, Session, VoteAttempt, VoteOutcome};
use crate::candidate_card::CandidateCard;
use crate::config::CONFIG;
use crate::gateway::HttpGateway;
use crate::hero::Hero;
use crate::ranking_card::RankingCard;
use crate::roster::mentor_roster;
use crate::styles::*;

const VOTE_FAILED_ALERT: &str = "投票に失敗しました。";

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub joke: bool,
}

pub enum Msg {
    Loaded(Result<LoadReport, Error>),
    Vote(CandidateId),
    Resolved(VoteOutcome),
    Sweep,
}

enum State {
    Ready(Rc<Session<HttpGateway>>),
    Misconfigured(String),
}

pub struct VoteBoard {
    state: State,
    notice: Option<String>,
    _sweep: Interval,
}

impl Component for VoteBoard {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let state = match mentor_roster() {
            Ok(roster) => {
                let session = Rc::new(Session::new(roster, HttpGateway::new(CONFIG.api_base_url)));
                let loader = session.clone();
                ctx.link().send_future(async move { Msg::Loaded(loader.load().await) });
                State::Ready(session)
            }
            Err(e) => {
                error!("mentor roster is invalid: {}", e);
                State::Misconfigured(e.to_string())
            }
        };

        let link = ctx.link().clone();
        let sweep = Interval::new(CONFIG.sweep_interval_ms, move || link.send_message(Msg::Sweep));

        Self { state, notice: None, _sweep: sweep }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let State::Ready(session) = &self.state else {
            return false;
        };

        match msg {
            Msg::Loaded(Ok(report)) => {
                if let Some(mismatch) = report.mismatch() {
                    warn!("{}", mismatch);
                }
                true
            }
            Msg::Loaded(Err(_)) => true,
            Msg::Vote(id) => {
                let started = session.begin_vote(id, OffsetDateTime::now_utc());
                self.notice = notice_after_vote(&started);
                if let Ok(attempt) = started {
                    let session = session.clone();
                    ctx.link().send_future(async move { Msg::Resolved(session.submit(attempt).await) });
                }
                true
            }
            Msg::Resolved(outcome) => {
                if let Some(e) = outcome.error() {
                    report_failure(e);
                }
                true
            }
            Msg::Sweep => {
                if session.reconciler().pending_count() == 0 {
                    return false;
                }
                let expired = session.expire_overdue(OffsetDateTime::now_utc(), CONFIG.vote_timeout());
                expired.iter().filter_map(VoteOutcome::error).for_each(report_failure);
                !expired.is_empty()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let joke = ctx.props().joke;
        let session = match &self.state {
            State::Ready(session) => session,
            State::Misconfigured(reason) => return html! {
                <div class={PAGE}>
                    <div class={alert_style("error")}>{reason}</div>
                </div>
            },
        };
        let reconciler = session.reconciler();
        let on_vote = ctx.link().callback(Msg::Vote);

        html! {
            <div class={PAGE}>
                <Hero
                    mentors={reconciler.roster().sorted_by_id().into_iter().cloned().collect::<Vec<_>>()}
                    {joke}
                />

                <section class={SECTION}>
                    <h2 class={HEADING}>{"総選挙説明"}</h2>
                    <p class={BODY_TEXT}>
                        {"メンター総選挙へようこそ。応援したいメンターの投票ボタンを押してください。何度でも投票できます。"}
                    </p>
                </section>

                {match &self.notice {
                    Some(notice) => html! { <div class={alert_style("warning")}>{notice}</div> },
                    None => html! {},
                }}

                <section class={SECTION}>
                    <h2 class={HEADING}>{format!("ランキング (上位{}位)", CONFIG.ranking_size)}</h2>
                    {match reconciler.load_state() {
                        LoadState::Failed(e) => html! {
                            <div class={alert_style("error")}>
                                <p>{"候補者情報の取得に失敗しました"}</p>
                                <p class={MUTED}>{e.to_string()}</p>
                            </div>
                        },
                        LoadState::Pending => html! {
                            <div class={combine_classes("animate-pulse", MUTED)}>{"Loading..."}</div>
                        },
                        LoadState::Ready(_) => html! {
                            <div class={CARD_GRID}>
                                {for reconciler.ranking(CONFIG.ranking_size).into_iter().map(|entry| {
                                    let image = CONFIG.mentor_image(&entry.candidate, joke);
                                    let key = entry.candidate.id;
                                    html! { <RankingCard key={key} {entry} {image} /> }
                                })}
                            </div>
                        },
                    }}
                </section>

                <section class={SECTION}>
                    <h2 class={HEADING}>{"投票"}</h2>
                    <div class={CARD_GRID}>
                        {for reconciler.roster().iter().map(|candidate| html! {
                            <CandidateCard
                                key={candidate.id}
                                candidate={candidate.clone()}
                                votes={reconciler.store().get(candidate.id)}
                                image={CONFIG.mentor_image(candidate, false)}
                                on_vote={on_vote.clone()}
                            />
                        })}
                    </div>
                </section>
            </div>
        }
    }
}

fn report_failure(e: &Error) {
    error!("{}", e);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(VOTE_FAILED_ALERT);
    }
}

/// A rejected vote leaves a notice until the next vote is accepted.
fn notice_after_vote(started: &shared::Result<VoteAttempt>) -> Option<String> {
    started.as_ref().err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::notice_after_vote;
    use shared::{Error, VoteAttempt};
    use time::OffsetDateTime;

    #[test]
    fn test_notice_clears_after_accepted_vote() {
        let rejected = Err(Error::invalid_candidate(999));
        let notice = notice_after_vote(&rejected);
        assert!(notice.unwrap().contains("Candidate 999 is not on the roster"));

        let accepted = Ok(VoteAttempt { id: 1, candidate: 3, delta: 1, started_at: OffsetDateTime::UNIX_EPOCH });
        assert_eq!(notice_after_vote(&accepted), None);
    }
}
