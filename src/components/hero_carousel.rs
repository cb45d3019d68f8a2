//! Auto-advancing hero carousel on the home page.

#[cfg(test)]
#[path = "hero_carousel_test.rs"]
mod hero_carousel_test;

use leptos::prelude::*;

/// Milliseconds between automatic slide advances.
pub const AUTO_ADVANCE_MS: u64 = 4500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub tag: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        tag: "New Season",
        title: "Discover African Craft",
        subtitle: "Handpicked pieces from vendors across Tanzania",
        cta: "Shop Now",
    },
    HeroSlide {
        tag: "Flash Deals",
        title: "Up To 50% Off",
        subtitle: "Limited-time markdowns on electronics and fashion",
        cta: "Grab a Deal",
    },
    HeroSlide {
        tag: "Sell With Us",
        title: "Open Your Shop",
        subtitle: "Reach thousands of shoppers on Nataka Hii",
        cta: "Become a Vendor",
    },
];

/// Wrap-around index of the slide after `active`.
pub fn next_slide(active: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (active + 1) % count }
}

#[component]
pub fn HeroCarousel() -> impl IntoView {
    let active = RwSignal::new(0usize);

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_ADVANCE_MS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                active.update(|index| *index = next_slide(*index, HERO_SLIDES.len()));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="hero-carousel">
            <div
                class="hero-slides"
                style=move || format!("transform: translateX(-{}%)", active.get() * 100)
            >
                {HERO_SLIDES
                    .iter()
                    .map(|slide| {
                        view! {
                            <div class="hero-slide">
                                <div class="hero-content">
                                    <div class="hero-tag-badge">
                                        <span>{slide.tag}</span>
                                    </div>
                                    <h1 class="hero-title">{slide.title}</h1>
                                    <p class="hero-subtitle">{slide.subtitle}</p>
                                    <a class="hero-cta" href="/browse">
                                        <span>{slide.cta}</span>
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="hero-pagination">
                {(0..HERO_SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                class="hero-dot"
                                class:active=move || active.get() == index
                                aria-label=format!("Go to slide {}", index + 1)
                                on:click=move |_| active.set(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
