//! Homepage component
//!
//! The single marketing page of the studio:
//! - Fixed header with in-page navigation
//! - Hero with animated stats and floating cards
//! - Services, portfolio, about, pricing and testimonial sections
//! - Contact section with the validated form
//! - Optional splash screen, scroll progress bar and theme toggle
//!
//! Markup only; behavior is attached by [`Enhancements`] after hydration.

use leptos::prelude::*;
use leptos_meta::{Meta, Style, Title};

use crate::core::SiteSettings;
use crate::ui::contact_form::ContactForm;
use crate::ui::enhancements::Enhancements;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::ThemeToggle;

/// Homepage component
#[component]
pub fn HomePage(settings: SiteSettings) -> impl IntoView {
    let flags = settings.enhancements;
    let footer_settings = settings.clone();

    view! {
        <SeoMeta />
        <HomeStyles />

        <Show when=move || flags.splash>
            <LoadingSplash />
        </Show>
        <Show when=move || flags.progress>
            <div class="scroll-progress">
                <div class="scroll-progress__bar"></div>
            </div>
        </Show>
        <Show when=move || flags.theme>
            <ThemeToggle />
        </Show>

        <Header />

        <main>
            <Hero />
            <Services />
            <Portfolio />
            <About />
            <Pricing />
            <Testimonials />
            <Contact settings=settings />
        </main>

        <Footer settings=footer_settings />

        <Enhancements flags=flags />
    }
}

/// SEO meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Ariatek Studio - Digital Products That Grow Your Business" />
        <Meta name="description" content="Ariatek Studio designs and builds websites, mobile apps and cloud platforms for ambitious teams." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Ariatek Studio" />
        <Meta property="og:description" content="Websites, mobile apps and cloud platforms, designed and built by one studio." />
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav class="nav container">
                <a href="#home" class="nav__logo">"Ariatek"<span>"Studio"</span></a>
                <ul class="nav__list">
                    <NavLink href="#home" label="Home" active=true />
                    <NavLink href="#services" label="Services" />
                    <NavLink href="#portfolio" label="Portfolio" />
                    <NavLink href="#about" label="About" />
                    <NavLink href="#pricing" label="Pricing" />
                    <NavLink href="#contact" label="Contact" />
                </ul>
            </nav>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str, #[prop(optional)] active: bool) -> impl IntoView {
    view! {
        <li class="nav__item">
            <a href=href class="nav__link" class:active=active>{label}</a>
        </li>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__container container">
                <div class="hero__content">
                    <h1 class="hero__title">"We Build Digital Products That Grow Your Business"</h1>
                    <p class="hero__description">
                        "From first sketch to production launch, Ariatek Studio turns ideas into fast, reliable software."
                    </p>
                    <div class="hero__actions">
                        <a href="#contact" class="btn btn--primary">"Start a Project"</a>
                        <a href="#portfolio" class="btn btn--secondary">"See Our Work"</a>
                    </div>
                    <div class="hero__stats">
                        <Stat value="150+" label="Projects Delivered" />
                        <Stat value="50+" label="Happy Clients" />
                        <Stat value="98%" label="Client Retention" />
                    </div>
                </div>
                <div class="hero__visual" aria-hidden="true">
                    <div class="floating-card floating-card--one">
                        <Icon name=icons::CODE />
                        <span>"Clean Code"</span>
                    </div>
                    <div class="floating-card floating-card--two">
                        <Icon name=icons::PALETTE />
                        <span>"Modern Design"</span>
                    </div>
                    <div class="floating-card floating-card--three">
                        <Icon name=icons::CHART />
                        <span>"Measurable Growth"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat__number">{value}</span>
            <span class="stat__label">{label}</span>
        </div>
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section__header">
            <h2 class="section__title">{title}</h2>
            <p class="section__subtitle">{subtitle}</p>
        </div>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services section">
            <div class="container">
                <SectionHeader
                    title="Our Services"
                    subtitle="Everything you need to launch and scale a digital product."
                />
                <div class="services__grid">
                    <ServiceCard
                        icon=icons::CODE
                        title="Web Development"
                        description="Fast, accessible websites and web apps built on modern stacks."
                    />
                    <ServiceCard
                        icon=icons::MOBILE
                        title="Mobile Apps"
                        description="Native-feeling iOS and Android apps from a single codebase."
                    />
                    <ServiceCard
                        icon=icons::PALETTE
                        title="UI/UX Design"
                        description="Research-driven interfaces that users understand at a glance."
                    />
                    <ServiceCard
                        icon=icons::CLOUD
                        title="Cloud Solutions"
                        description="Scalable infrastructure, deployments and monitoring."
                    />
                    <ServiceCard
                        icon=icons::CHART
                        title="Digital Marketing"
                        description="SEO, analytics and campaigns that bring the right visitors."
                    />
                    <ServiceCard
                        icon=icons::SHIELD
                        title="Security Audits"
                        description="Reviews and hardening for applications already in production."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="service__card">
            <div class="service__icon">
                <Icon name=icon />
            </div>
            <h3 class="service__title">{title}</h3>
            <p class="service__description">{description}</p>
        </div>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="portfolio section">
            <div class="container">
                <SectionHeader
                    title="Recent Work"
                    subtitle="A selection of products we have shipped with our clients."
                />
                <div class="portfolio__grid">
                    <PortfolioItem
                        category="E-commerce"
                        title="Northwind Market"
                        description="Headless storefront serving two million monthly visitors."
                    />
                    <PortfolioItem
                        category="Fintech"
                        title="Ledgerly"
                        description="Mobile banking app with real-time spending insights."
                    />
                    <PortfolioItem
                        category="Healthcare"
                        title="CareBridge"
                        description="Patient portal connecting clinics and families."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PortfolioItem(
    category: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="portfolio__item">
            <div class="portfolio__image" aria-hidden="true"></div>
            <div class="portfolio__content">
                <span class="portfolio__category">{category}</span>
                <h3 class="portfolio__title">{title}</h3>
                <p class="portfolio__description">{description}</p>
            </div>
        </article>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="about section">
            <div class="container about__container">
                <div class="about__content">
                    <h2 class="section__title">"About Ariatek"</h2>
                    <p class="about__description">
                        "We are a small team of engineers and designers who care about craft. "
                        "Every project gets senior attention from kickoff to launch."
                    </p>
                </div>
                <div class="about__values">
                    <div class="value">
                        <Icon name=icons::LIGHTBULB />
                        <h4>"Innovation"</h4>
                        <p>"We pick the right tool, not the trendy one."</p>
                    </div>
                    <div class="value">
                        <Icon name=icons::USERS />
                        <h4>"Partnership"</h4>
                        <p>"Your goals set our roadmap."</p>
                    </div>
                    <div class="value">
                        <Icon name=icons::STAR />
                        <h4>"Quality"</h4>
                        <p>"Tested, documented and built to last."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing section">
            <div class="container">
                <SectionHeader
                    title="Simple Pricing"
                    subtitle="Fixed-scope packages, no surprises."
                />
                <div class="pricing__grid">
                    <PricingCard
                        name="Starter"
                        price="$2,900"
                        features=&["Landing page", "Responsive design", "Basic SEO"]
                    />
                    <PricingCard
                        name="Growth"
                        price="$7,900"
                        features=&["Multi-page website", "CMS integration", "Analytics setup", "3 months support"]
                        featured=true
                    />
                    <PricingCard
                        name="Enterprise"
                        price="Custom"
                        features=&["Web and mobile apps", "Cloud architecture", "Dedicated team"]
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    #[prop(optional)] featured: bool,
) -> impl IntoView {
    let class = if featured {
        "pricing__card pricing__card--featured"
    } else {
        "pricing__card"
    };

    view! {
        <div class=class>
            {featured.then(|| view! { <span class="pricing__badge">"Most Popular"</span> })}
            <h3 class="pricing__name">{name}</h3>
            <div class="pricing__price">{price}</div>
            <ul class="pricing__features">
                {features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <Icon name=icons::CHECK />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href="#contact" class="btn btn--primary">"Get Started"</a>
        </div>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials section">
            <div class="container">
                <SectionHeader title="What Clients Say" subtitle="Results our partners are proud of." />
                <div class="testimonials__grid">
                    <div class="testimonial__card">
                        <p class="testimonial__text">
                            "Ariatek rebuilt our store in eight weeks and conversions went up by a third."
                        </p>
                        <span class="testimonial__author">"Maya Lin, Northwind Market"</span>
                    </div>
                    <div class="testimonial__card">
                        <p class="testimonial__text">
                            "The most dependable agency we have worked with. Deadlines are simply met."
                        </p>
                        <span class="testimonial__author">"Jonas Berg, Ledgerly"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact(settings: SiteSettings) -> impl IntoView {
    view! {
        <section id="contact" class="contact section">
            <div class="container contact__container">
                <div class="contact__info">
                    <h2 class="section__title">"Let's Talk"</h2>
                    <p>"Tell us about your project and we will reply within one business day."</p>
                    <ul class="contact__details">
                        <li>
                            <Icon name=icons::ENVELOPE />
                            <a href=settings.mailto()>{settings.contact_email().to_string()}</a>
                        </li>
                        <li>
                            <Icon name=icons::PHONE />
                            <span>"+1 (555) 014-2210"</span>
                        </li>
                        <li>
                            <Icon name=icons::MAP_MARKER />
                            <span>"Remote, worldwide"</span>
                        </li>
                    </ul>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
fn Footer(settings: SiteSettings) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__container">
                <span>"© 2025 Ariatek Studio"</span>
                <a href=settings.mailto()>{settings.contact_email().to_string()}</a>
            </div>
        </footer>
    }
}

/// Full-screen overlay shown until the page has loaded
#[component]
fn LoadingSplash() -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="loading-content">
                <div class="loading-spinner"></div>
                <h2>"Ariatek Studio"</h2>
                <p>"Loading Digital Excellence..."</p>
            </div>
        </div>
    }
}

/// Design tokens and the styles of the optional features
#[component]
fn HomeStyles() -> impl IntoView {
    view! { <Style>{HOME_CSS}</Style> }
}

const HOME_CSS: &str = r#"
:root {
    --primary-color: #2563eb;
    --primary-light: #60a5fa;
    --background-primary: #ffffff;
    --background-secondary: #f8fafc;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-light: #94a3b8;
    --border-color: #e2e8f0;
    --error-color: #dc2626;
    --success-color: #16a34a;
    --font-size-sm: 0.875rem;
    --spacing-xs: 0.25rem;
    --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    --transition-normal: all 0.3s ease;
}

.dark-theme {
    --background-primary: #0f172a;
    --background-secondary: #1e293b;
    --text-primary: #f1f5f9;
    --text-secondary: #cbd5e1;
    --text-light: #64748b;
    --border-color: #334155;
}

body {
    background: var(--background-primary);
    color: var(--text-primary);
}

.header {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 1000;
    background: rgba(255, 255, 255, 0.95);
    transition: var(--transition-normal);
}

.nav__link.active {
    color: var(--primary-color);
}

.service__card,
.portfolio__item,
.pricing__card {
    transition: var(--transition-normal);
}

.loading-overlay {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: linear-gradient(135deg, var(--primary-color), var(--primary-light));
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 9999;
    color: white;
    transition: opacity 0.5s ease;
}

.loading-content {
    text-align: center;
}

.loading-spinner {
    width: 60px;
    height: 60px;
    border: 4px solid rgba(255, 255, 255, 0.3);
    border-top: 4px solid white;
    border-radius: 50%;
    animation: spin 1s linear infinite;
    margin: 0 auto 2rem;
}

@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}

.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 3px;
    background: transparent;
    z-index: 1001;
}

.scroll-progress__bar {
    height: 100%;
    background: linear-gradient(90deg, var(--primary-color), var(--primary-light));
    width: 0%;
    transition: width 0.1s ease-out;
}

.theme-toggle {
    position: fixed;
    top: 2rem;
    right: 2rem;
    width: 50px;
    height: 50px;
    border: none;
    border-radius: 50%;
    background: var(--primary-color);
    color: white;
    cursor: pointer;
    z-index: 1000;
    transition: var(--transition-normal);
    box-shadow: var(--shadow-lg);
}

.theme-toggle:hover {
    transform: scale(1.1);
    background: var(--primary-light);
}
"#;
