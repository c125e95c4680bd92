//! Landing page component
//!
//! Single scrolling page for IntMoney:
//! - SEO meta tags and JSON-LD structured data
//! - Navbar with desktop links, theme toggle and a full-screen mobile menu
//! - Hero, features, how-it-works, ecosystem and call-to-action sections
//! - Footer
//!
//! Every "join" button opens the shared waitlist dialog, which is mounted once
//! at the bottom of the page.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SiteConfig;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeContext, ThemeMode, use_theme_context};
use crate::ui::waitlist::{WaitlistButton, WaitlistModal};

const PAGE_TITLE: &str = "IntMoney - AI-Powered Cross-Border Payments";
const PAGE_DESCRIPTION: &str = "The AI-powered mobile wallet for seamless cross-border payments using simple chat or voice commands.";
const REPOSITORY_URL: &str = "https://github.com/int-money/landing-page";

/// In-page sections linked from the navbar
const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#ecosystem", "Ecosystem"),
];

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <SeoMeta site_url=config.site_url.clone() />

        <SkipToContent />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Navbar theme=theme />

            <main id="main-content">
                // Hero Section
                <section class="min-h-screen flex items-center justify-center relative pt-16">
                    <div class="text-center px-4 max-w-4xl mx-auto">
                        <span class="inline-block mb-6 px-4 py-1 text-sm font-medium rounded-full bg-accent-primary/10 text-accent-primary
                                     landing-fade-in-up">
                            "Coming soon"
                        </span>
                        <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight
                                   landing-fade-in-up">
                            "Send money across borders by just asking"
                        </h1>
                        <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed
                                  landing-fade-in-up landing-delay-200">
                            "IntMoney is your AI financial agent. Pay, request and convert in any currency with a chat message or a voice command."
                        </p>

                        <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                            <WaitlistButton aria_label="Join the IntMoney waitlist">
                                "Join the Waitlist"
                                <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5 ml-2 inline" />
                            </WaitlistButton>
                            <a href="#how-it-works" class="landing-btn-secondary">
                                "See How It Works"
                            </a>
                        </div>
                    </div>

                    // Background decoration
                    <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                        <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                        <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
                    </div>
                </section>

                // Features Section
                <section id="features" class="py-20 px-4 bg-theme-secondary/10">
                    <div class="max-w-6xl mx-auto">
                        <div class="text-center mb-16 landing-scroll-animate">
                            <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                                "Why IntMoney?"
                            </h2>
                            <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                                "A wallet that understands what you mean and handles the rest."
                            </p>
                        </div>

                        <div class="grid md:grid-cols-3 gap-8">
                            <FeatureCard
                                icon=icons::BRAIN
                                title="AI Financial Agent"
                                description="Describe what you want in plain words. The agent prepares the payment and asks you to confirm."
                            />
                            <FeatureCard
                                icon=icons::GLOBE
                                title="Cross-Border by Default"
                                description="Send to friends and family abroad without juggling banks, forms or exchange offices."
                            />
                            <FeatureCard
                                icon=icons::ZAP
                                title="Instant Settlement"
                                description="Transfers arrive in seconds instead of days."
                            />
                            <FeatureCard
                                icon=icons::WALLET
                                title="One Wallet"
                                description="Hold, convert and spend multiple currencies from a single balance."
                            />
                            <FeatureCard
                                icon=icons::TRENDING_UP
                                title="Transparent Fees"
                                description="See the exact rate and fee before you send. No hidden markups."
                            />
                            <FeatureCard
                                icon=icons::SHIELD
                                title="Secure by Design"
                                description="Every payment needs your explicit approval. Your keys stay on your device."
                            />
                        </div>
                    </div>
                </section>

                // How It Works Section
                <section id="how-it-works" class="py-20 px-4">
                    <div class="max-w-5xl mx-auto">
                        <div class="text-center mb-16 landing-scroll-animate">
                            <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                                "How It Works"
                            </h2>
                            <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                                "Three steps from intent to money delivered."
                            </p>
                        </div>

                        <ol class="grid md:grid-cols-3 gap-8">
                            <StepCard
                                step=1
                                title="Ask"
                                description="\"Send 50 euros to Maria in Lisbon.\" Type it or say it."
                            />
                            <StepCard
                                step=2
                                title="Review"
                                description="The agent shows the recipient, rate and fee so you know exactly what happens."
                            />
                            <StepCard
                                step=3
                                title="Done"
                                description="Confirm once and the transfer settles in seconds."
                            />
                        </ol>
                    </div>
                </section>

                // Ecosystem Section
                <section id="ecosystem" class="py-20 px-4 bg-theme-secondary/10">
                    <div class="max-w-4xl mx-auto text-center landing-scroll-animate">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Built on an Open Ecosystem"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto mb-8">
                            "IntMoney runs on open payment rails and open-source tooling, so anyone can verify how their money moves."
                        </p>
                        <a
                            href=REPOSITORY_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-accent-primary font-medium hover:underline"
                        >
                            <GithubIcon />
                            "Explore the code on GitHub"
                        </a>
                    </div>
                </section>

                // Call to Action Section
                <section class="py-24 px-4">
                    <div class="max-w-3xl mx-auto text-center landing-scroll-animate">
                        <h2 class="text-4xl sm:text-5xl font-bold text-theme-primary mb-6">
                            "Be first in line"
                        </h2>
                        <p class="text-lg text-theme-secondary mb-10">
                            "Join the waitlist and get early access to your AI financial agent."
                        </p>
                        <WaitlistButton>"Join the Waitlist"</WaitlistButton>
                    </div>
                </section>
            </main>

            <Footer />

            <WaitlistModal />

            <LandingStyles />
            <ScrollAnimationScript />
        </div>
    }
}

/// Keyboard users can jump past the navbar
#[component]
fn SkipToContent() -> impl IntoView {
    view! {
        <a
            href="#main-content"
            class="sr-only focus:not-sr-only focus:fixed focus:top-4 focus:left-4 focus:z-[100]
                   px-6 py-3 bg-accent-primary text-white font-medium rounded-full shadow-lg"
        >
            "Skip to main content"
        </a>
    }
}

/// Navbar with desktop links and a full-screen mobile menu
#[component]
fn Navbar(theme: ThemeContext) -> impl IntoView {
    let mobile_menu_open = RwSignal::new(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="/" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"IntMoney"</span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4" aria-label="Main">
                            {NAV_LINKS.into_iter().map(|(href, label)| view! {
                                <a href=href class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                    {label}
                                </a>
                            }).collect_view()}
                        </nav>
                        <ThemeToggle theme=theme />
                        <WaitlistButton class="landing-btn-small">"Join Waitlist"</WaitlistButton>
                    </div>

                    // Mobile menu button
                    <button
                        type="button"
                        class="md:hidden relative z-50 p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                        aria-controls="mobile-menu"
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>

        <MobileMenu is_open=mobile_menu_open theme=theme />
    }
}

/// Full-screen menu for small viewports. Locks page scroll while open.
#[component]
fn MobileMenu(is_open: RwSignal<bool>, theme: ThemeContext) -> impl IntoView {
    let close = move || is_open.set(false);

    #[cfg(not(feature = "ssr"))]
    {
        fn set_body_overflow(value: &str) {
            if let Some(body) = leptos::web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let _ = body.style().set_property("overflow", value);
            }
        }

        Effect::new(move |_| {
            set_body_overflow(if is_open.get() { "hidden" } else { "" });
        });

        on_cleanup(|| set_body_overflow(""));
    }

    view! {
        <div
            id="mobile-menu"
            class="fixed inset-0 z-40 bg-theme-primary/90 backdrop-blur-2xl transition-all duration-500 md:hidden"
            class:opacity-0=move || !is_open.get()
            class:pointer-events-none=move || !is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div class="flex flex-col items-center justify-center min-h-screen gap-8 p-8">
                <nav class="flex flex-col items-center gap-6" aria-label="Mobile">
                    {NAV_LINKS.into_iter().map(|(href, label)| view! {
                        <a
                            href=href
                            class="text-3xl font-bold text-theme-primary hover:text-accent-primary transition-colors"
                            on:click=move |_| close()
                        >
                            {label}
                        </a>
                    }).collect_view()}
                </nav>

                <ThemeToggle theme=theme />

                <WaitlistButton on_click=Callback::new(move |_: ()| close())>
                    "Join the Waitlist"
                    <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5 ml-2 inline" />
                </WaitlistButton>
            </div>
        </div>
    }
}

/// Cycles light -> dark -> system
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.cycle()
            aria-label="Toggle theme"
            title=move || format!("Theme: {}", theme.mode.get().display_name())
        >
            {move || {
                let icon = match theme.mode.get() {
                    ThemeMode::Light => icons::SUN,
                    ThemeMode::Dark => icons::MOON,
                    ThemeMode::System => icons::MONITOR,
                };
                view! { <Icon name=icon class="w-5 h-5" /> }
            }}
        </button>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}

#[component]
fn StepCard(step: u8, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <li class="landing-scroll-animate text-center">
            <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-accent-primary text-white text-lg font-bold
                        flex items-center justify-center">
                {step}
            </div>
            <h3 class="text-xl font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </li>
    }
}

/// JSON-LD describing the organization and the site, safe to inline in a script tag
fn structured_data(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let data = serde_json::json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "@id": format!("{base}/#organization"),
                "name": "IntMoney",
                "url": base,
                "logo": format!("{base}/icon.svg"),
                "sameAs": [REPOSITORY_URL],
            },
            {
                "@type": "WebSite",
                "@id": format!("{base}/#website"),
                "url": base,
                "name": PAGE_TITLE,
                "description": PAGE_DESCRIPTION,
                "publisher": { "@id": format!("{base}/#organization") },
            },
        ],
    });
    data.to_string().replace("</", "<\\/")
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta(site_url: String) -> impl IntoView {
    let canonical = format!("{}/", site_url.trim_end_matches('/'));
    let json_ld = structured_data(&site_url);

    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content="cross-border payments, AI wallet, mobile wallet, remittance, voice payments, financial agent" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=PAGE_DESCRIPTION />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-blue-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <span class="text-white text-lg font-bold" aria-hidden="true">"$"</span>
        </div>
    }
}

/// GitHub icon component
#[component]
fn GithubIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>
        </svg>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"IntMoney"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">{PAGE_DESCRIPTION}</p>
                    </div>

                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS.into_iter().map(|(href, label)| view! {
                                <li>
                                    <a href=href class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                        {label}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">"© 2025 IntMoney. All rights reserved."</span>
                    <a href=REPOSITORY_URL target="_blank" rel="noopener noreferrer"
                       class="text-theme-tertiary hover:text-theme-primary transition-colors"
                       aria-label="GitHub repository">
                        <GithubIcon />
                    </a>
                </div>
            </div>
        </footer>
    }
}

/// CSS styles for landing page buttons, the dialog and animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .landing-btn-primary {
                display: inline-flex;
                align-items: center;
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: #2563eb;
                border-radius: 9999px;
                transition: all 0.3s;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover:not(:disabled) {
                transform: scale(1.05);
                background-color: #1d4ed8;
            }
            .landing-btn-primary:disabled {
                opacity: 0.7;
                cursor: not-allowed;
            }

            .landing-btn-small {
                padding: 0.5rem 1.25rem;
                font-weight: 600;
                font-size: 0.875rem;
                color: white;
                background-color: #2563eb;
                border-radius: 9999px;
                cursor: pointer;
            }

            .landing-btn-secondary {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                border: 2px solid #9ca3af;
                border-radius: 9999px;
                transition: all 0.3s;
                background-color: #f9fafb;
                color: #374151;
            }
            .dark .landing-btn-secondary {
                background-color: #1f2937;
                border-color: #6b7280;
                color: #e5e7eb;
            }
            .landing-btn-secondary:hover {
                transform: scale(1.05);
            }

            .modal-backdrop {
                background-color: rgba(0, 0, 0, 0.6);
                backdrop-filter: blur(4px);
            }
            .glass-card {
                background-color: rgba(255, 255, 255, 0.9);
            }
            .dark .glass-card {
                background-color: rgba(17, 24, 39, 0.9);
            }

            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-fade-in-up,
                .landing-scroll-animate {
                    animation: none;
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
