//! Widget components. All state lives in one `RwSignal<App>`; every input
//! goes through `App`'s handlers so derived values are recomputed on read.

use leptos::*;

use storefront_reviews::{Rating, Recommendation};

use crate::App;
use crate::tabs::Tab;

/// Root component: cart counter plus the product card.
#[component]
pub fn Storefront(storefront: App) -> impl IntoView {
    let state = create_rw_signal(storefront);

    view! {
        <div id="app">
            <div class="nav-bar"></div>
            <div class="cart">
                <p>{move || state.with(|s| s.cart_label())}</p>
            </div>
            <Product state=state/>
        </div>
    }
}

#[component]
fn Product(state: RwSignal<App>) -> impl IntoView {
    let card = move || state.with(|s| s.card().view());
    let in_stock = move || state.with(|s| s.card().in_stock());

    // Variants never change after startup, so the swatches are built once.
    let swatches = state.with_untracked(|s| s.card().view().swatches);

    view! {
        <div class="product">
            <div class="product-image">
                <img src=move || card().active_image alt=move || card().alt_text/>
            </div>
            <div class="product-info">
                <h1>{move || card().title}</h1>
                <p>{move || card().description}</p>
                <p class:out-of-stock=move || !in_stock()>{move || card().stock.label()}</p>
                <p>{move || card().sale_message}</p>
                <a href=move || card().link>"More products like this"</a>

                <ProductTabs state=state/>

                <div class="cart-buttons">
                    <button
                        on:click=move |_| state.update(|s| {
                            if let Err(e) = s.click_add_to_cart() {
                                logging::warn!("add to cart failed: {e}");
                            }
                        })
                        disabled=move || !in_stock()
                        class:disabled-button=move || !in_stock()
                    >
                        "Add to cart"
                    </button>
                    <button on:click=move |_| state.update(|s| {
                        if let Err(e) = s.click_remove_from_cart() {
                            logging::warn!("remove from cart failed: {e}");
                        }
                    })>
                        "Remove from cart"
                    </button>
                </div>

                {swatches
                    .into_iter()
                    .map(|swatch| {
                        let index = swatch.index;
                        view! {
                            <div
                                class="color-box"
                                style=format!("background-color: {};", swatch.color)
                                on:mouseover=move |_| state.update(|s| {
                                    if let Err(e) = s.hover_variant(index) {
                                        logging::warn!("variant hover ignored: {e}");
                                    }
                                })
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProductTabs(state: RwSignal<App>) -> impl IntoView {
    let selected = move || state.with(|s| s.tabs().selected());
    let shown = move |tab: Tab| move || if selected() == tab { "block" } else { "none" };
    let details = state.with_untracked(|s| s.card().product().details().to_vec());

    view! {
        <div>
            <ul>
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <span
                                class="tab"
                                class:active-tab=move || selected() == tab
                                on:click=move |_| state.update(|s| s.select_tab(tab))
                            >
                                {tab.label()}
                            </span>
                        }
                    })
                    .collect_view()}
            </ul>
            <div style:display=shown(Tab::Reviews)>
                {move || {
                    let reviews = state.with(|s| s.card().reviews());
                    if reviews.is_empty() {
                        view! { <p>"There are no reviews yet."</p> }.into_view()
                    } else {
                        view! {
                            <ul>
                                {reviews
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <li>
                                                <p>{r.name().to_string()}</p>
                                                <p>{format!("Rating: {}", r.rating())}</p>
                                                <p>{r.text().to_string()}</p>
                                                <p>{format!("Recommend: {}", r.recommend())}</p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </div>
            <div style:display=shown(Tab::MakeAReview)>
                <ProductReview state=state/>
            </div>
            <div style:display=shown(Tab::Shipping)>
                <p>{move || format!("Shipping: {}", state.with(|s| s.card().shipping_cost()))}</p>
            </div>
            <div style:display=shown(Tab::Details)>
                <ProductDetails details=details/>
            </div>
        </div>
    }
}

#[component]
fn ProductReview(state: RwSignal<App>) -> impl IntoView {
    let errors = move || state.with(|s| s.form().errors().to_vec());
    let recommends = move |answer: Recommendation| {
        move || state.with(|s| s.form().recommend() == Some(answer))
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            if let Err(e) = s.submit_review() {
                logging::error!("review not delivered: {e}");
            }
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            {move || {
                let errors = errors();
                (!errors.is_empty())
                    .then(|| {
                        view! {
                            <p>
                                <b>"Please correct the following error(s):"</b>
                                <ul>
                                    {errors
                                        .into_iter()
                                        .map(|e| view! { <li>{e.to_string()}</li> })
                                        .collect_view()}
                                </ul>
                            </p>
                        }
                    })
            }}
            <p>
                <label for="name">"Name:"</label>
                <input
                    id="name"
                    placeholder="name"
                    prop:value=move || state.with(|s| s.form().name().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form_mut().set_name(value));
                    }
                />
            </p>
            <p>
                <label for="review">"Review:"</label>
                <textarea
                    id="review"
                    prop:value=move || state.with(|s| s.form().text().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form_mut().set_text(value));
                    }
                ></textarea>
            </p>
            <p>
                <label for="rating">"Rating:"</label>
                <select
                    id="rating"
                    prop:value=move || {
                        state.with(|s| s.form().rating().map(|r| r.to_string()).unwrap_or_default())
                    }
                    on:change=move |ev| {
                        let rating = event_target_value(&ev).parse::<Rating>().ok();
                        state.update(|s| s.form_mut().set_rating(rating));
                    }
                >
                    {Rating::OPTIONS
                        .into_iter()
                        .map(|r| view! { <option value=r.to_string()>{r.to_string()}</option> })
                        .collect_view()}
                </select>
            </p>
            <p>
                <label>"Would you recommend this product?"</label>
                <input
                    type="radio"
                    id="recommend-yes"
                    name="recommend"
                    value="yes"
                    prop:checked=recommends(Recommendation::Yes)
                    on:change=move |_| state.update(|s| s.form_mut().set_recommend(Some(Recommendation::Yes)))
                />
                <label for="recommend-yes">"Yes"</label>
                <input
                    type="radio"
                    id="recommend-no"
                    name="recommend"
                    value="no"
                    prop:checked=recommends(Recommendation::No)
                    on:change=move |_| state.update(|s| s.form_mut().set_recommend(Some(Recommendation::No)))
                />
                <label for="recommend-no">"No"</label>
            </p>
            <p>
                <input type="submit" value="Submit"/>
            </p>
        </form>
    }
}

#[component]
fn ProductDetails(details: Vec<String>) -> impl IntoView {
    view! {
        <ul>
            {details.into_iter().map(|detail| view! { <li>{detail}</li> }).collect_view()}
        </ul>
    }
}
