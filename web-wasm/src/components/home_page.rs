//! Home / profile page

use crate::profile;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (revealed, set_revealed) = signal(false);

    // one-shot; the page may be gone when it fires
    Timeout::new(profile::BAR_REVEAL_MS, move || {
        let _ = set_revealed.try_set(true);
    })
    .forget();

    view! {
        <div class="home">
            <div class="home-grid">
                <section class="card profile-card">
                    <span class="badge">"PERFIL"</span>
                    <h2 class="name">{profile::NAME}</h2>
                    <h3 class="surname">{profile::SURNAME}</h3>
                    <p class="role">{profile::ROLE}</p>
                    <img class="profile-photo" src=profile::PHOTO_URL alt=profile::NAME />
                </section>

                <section class="card disc-card">
                    <p class="section-label">"PERFIL DISC"</p>
                    <div class="disc-grid">
                        {profile::DISC
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="disc-item">
                                        <p class="disc-label">{label}</p>
                                        <div class="bar">
                                            <div
                                                class="bar-fill"
                                                style:width=move || {
                                                    if revealed.get() { format!("{}%", value) } else { "0%".to_string() }
                                                }
                                            ></div>
                                        </div>
                                        <p class="disc-value">{format!("{}%", value)}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="disc-interpretation">
                        <p class="section-label">"INTERPRETACIÓN"</p>
                        <p>{profile::DISC_INTERPRETATION}</p>
                    </div>
                </section>
            </div>

            <section class="card competencies">
                <p class="section-label">"COMPETENCIAS CFI (Calificador de Factores de Interés)"</p>
                <ul>
                    {profile::COMPETENCIES
                        .into_iter()
                        .map(|(name, value)| {
                            view! {
                                <li class="competency">
                                    <span>{name}</span>
                                    <span class="score">{format!("{}%", value)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="card quote">
                <p class="quote-text">{format!("\"{}\"", profile::QUOTE)}</p>
                <p class="quote-author">{format!("— {}", profile::QUOTE_AUTHOR)}</p>
            </section>
        </div>
    }
}
