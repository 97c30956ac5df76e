use gloo_timers::callback::Timeout;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::diagnostics::DiagnosticsPanel;
use crate::config;
use crate::contact;
use crate::interactions::gesture::TapDetector;
use crate::interactions::glow::use_pointer_glow;
use crate::interactions::reveal::use_reveal;
use crate::interactions::stats::{now_ms, use_session_stats};
use crate::theme::use_theme;

const NAV_LINKS: [(&str, &str); 5] = [
    ("Services", "#services"),
    ("Work", "#work"),
    ("Process", "#process"),
    ("FAQ", "#faq"),
    ("Contact", "#contact"),
];

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal();

    let hero_card = use_node_ref();
    use_pointer_glow(hero_card.clone());

    let (theme, toggle_theme) = use_theme();
    let drawer_open = use_state(|| false);
    let secret_open = use_state(|| false);
    let copied = use_state(|| false);
    let (stats, mount_at) = use_session_stats();
    let taps = use_mut_ref(TapDetector::new);

    let wa = use_memo(|_| contact::whatsapp_url(), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_brand_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    let on_logo_tap = {
        let secret_open = secret_open.clone();
        let taps = taps.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if taps.borrow_mut().register(js_sys::Date::now()) {
                secret_open.set(!*secret_open);
            }
        })
    };

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(true))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(false))
    };
    let keep_drawer = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            contact::copy_text(
                contact::pitch(),
                Callback::from(move |_| {
                    copied.set(true);
                    let copied = copied.clone();
                    Timeout::new(2000, move || copied.set(false)).forget();
                }),
            );
        })
    };

    let on_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    let elapsed_ms = now_ms() - mount_at;
    let theme_label = format!("Theme: {}", theme.as_str());

    html! {
        <div class="page">
            <style>{PAGE_CSS}</style>

            <div class="bg" aria-hidden="true">
                <div class="orb o1"></div>
                <div class="orb o2"></div>
                <div class="grid-lines"></div>
            </div>

            <header class="topbar">
                <div class="wrap bar" data-reveal="">
                    <a class="brand" href="#top" onclick={on_brand_click} aria-label={config::BRAND}>
                        <span class="mark" onclick={on_logo_tap} title={config::BRAND}>
                            <span class="cube" aria-hidden="true"></span>
                        </span>
                        <span class="btxt">
                            <b>{config::BRAND}</b>
                            <span>{"Web • UI • Deploy"}</span>
                        </span>
                    </a>

                    <nav class="nav" aria-label="Site">
                        { for NAV_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href}>{*label}</a>
                        }) }
                    </nav>

                    <div class="actions">
                        <button class="icon-btn" type="button" onclick={toggle_theme} aria-label={theme_label}>
                            {"◐"}
                        </button>
                        <button class="icon-btn burger" type="button" onclick={open_drawer} aria-label="Open menu">
                            <span class="lines"></span>
                        </button>
                        <a class="btn primary" href="#contact">{"Request a quote"}</a>
                    </div>
                </div>

                <div
                    class={classes!("drawer", (*drawer_open).then_some("open"))}
                    role="dialog"
                    aria-hidden={(!*drawer_open).to_string()}
                    onclick={close_drawer.clone()}
                >
                    <div class="drawer-card" onclick={keep_drawer}>
                        { for NAV_LINKS.iter().map(|(label, href)| html! {
                            <a class="dlink" href={*href} onclick={close_drawer.clone()}>{*label}</a>
                        }) }
                        <button class="btn ghost" type="button" onclick={close_drawer.clone()}>{"Close"}</button>
                    </div>
                </div>
            </header>

            <main id="top" class="hero">
                <div class="wrap hero-grid">
                    <section class="hero-text" data-reveal="">
                        <div class="kicker">
                            <span class="dot"></span>
                            {"Fast delivery + polished look + measurable results"}
                        </div>

                        <h1>
                            {"Your site should sell…"}
                            <span class="grad">{" not just look pretty"}</span>
                        </h1>

                        <p class="sub">
                            {"ICODE builds landing pages, company sites and clean UIs that load fast \
                              and ship deploy-ready, DNS wired up, no headaches."}
                        </p>

                        <div class="hero-ctas">
                            <a class="btn primary" href="#contact">{"Start your project"}</a>
                            <a class="btn ghost" href="#services">{"See the services"}</a>
                        </div>

                        <div class="proof">
                            <div class="proof-item">
                                <b>{"Performance first"}</b>
                                <span>{"Fast loads, smooth experience"}</span>
                            </div>
                            <div class="proof-item">
                                <b>{"Convincing design"}</b>
                                <span>{"Content hierarchy that drives decisions"}</span>
                            </div>
                            <div class="proof-item">
                                <b>{"Clear delivery"}</b>
                                <span>{"Stages + deliverables + revisions"}</span>
                            </div>
                        </div>
                    </section>

                    <aside class="hero-card" ref={hero_card} data-reveal="">
                        <div class="card-head">
                            <div>
                                <div class="card-title">{"Quick quote"}</div>
                                <div class="card-hint">{"Within 24–72h depending on scope"}</div>
                            </div>
                            <span class="chip">{"Deploy-ready"}</span>
                        </div>

                        <div class="card-list">
                            <div class="row">
                                <span class="check">{"✓"}</span>
                                <div>
                                    <b>{"Landing page"}</b>
                                    <p>{"Sales structure + CTA + WhatsApp + basic SEO"}</p>
                                </div>
                            </div>
                            <div class="row">
                                <span class="check">{"✓"}</span>
                                <div>
                                    <b>{"Clean UI"}</b>
                                    <p>{"Proper contrast + solid typography + responsive"}</p>
                                </div>
                            </div>
                            <div class="row">
                                <span class="check">{"✓"}</span>
                                <div>
                                    <b>{"Deploy + DNS"}</b>
                                    <p>{"Cloudflare/GitHub Pages + handover docs"}</p>
                                </div>
                            </div>
                        </div>

                        <div class="card-foot">
                            <a class="btn primary wide" href={(*wa).clone()} target="_blank" rel="noreferrer">
                                {"Open WhatsApp"}
                            </a>
                            <button class="btn ghost wide" type="button" onclick={on_copy}>
                                {if *copied { "Copied ✓" } else { "Copy the ready-made pitch" }}
                            </button>
                            <p class="tiny">{"*Pricing is set once pages, content and deadline are known."}</p>
                        </div>

                        <DiagnosticsPanel open={*secret_open} stats={*stats} elapsed_ms={elapsed_ms} />
                    </aside>
                </div>
            </main>

            <section class="section" id="services">
                <div class="wrap" data-reveal="">
                    <div class="sec-head">
                        <h2>{"Services"}</h2>
                        <p>{"Practical work delivered as a finished product, not promises."}</p>
                    </div>

                    <div class="grid3">
                        <article class="card">
                            <h3>{"Landing pages that sell"}</h3>
                            <p>{"Content structure that converts: offer → proof → CTA."}</p>
                            <div class="tags"><span>{"CTA"}</span><span>{"SEO"}</span><span>{"WhatsApp"}</span></div>
                        </article>

                        <article class="card">
                            <h3>{"Company sites"}</h3>
                            <p>{"Brand + services + work + contact, arranged to convince."}</p>
                            <div class="tags"><span>{"Brand"}</span><span>{"Responsive"}</span><span>{"Content"}</span></div>
                        </article>

                        <article class="card">
                            <h3>{"UI implementation"}</h3>
                            <p>{"Turning a design into a real, maintainable interface."}</p>
                            <div class="tags"><span>{"Clean UI"}</span><span>{"Components"}</span><span>{"Accessibility"}</span></div>
                        </article>
                    </div>
                </div>
            </section>

            <section class="section" id="work">
                <div class="wrap" data-reveal="">
                    <div class="sec-head">
                        <h2>{"Work"}</h2>
                        <p>{"Drop your project links in later. These are illustrative templates."}</p>
                    </div>

                    <div class="grid3">
                        <article class="card"><h3>{"Landing — services"}</h3><p>{"Strong hero + sales sections + clear CTA."}</p></article>
                        <article class="card"><h3>{"Portfolio — personal"}</h3><p>{"Skills and work, shown without overstating."}</p></article>
                        <article class="card"><h3>{"Company — business"}</h3><p>{"Ready structure: services/work/contact."}</p></article>
                    </div>
                </div>
            </section>

            <section class="section" id="process">
                <div class="wrap" data-reveal="">
                    <div class="sec-head">
                        <h2>{"Process"}</h2>
                        <p>{"4 stages, each with a concrete deliverable."}</p>
                    </div>

                    <div class="steps">
                        <div class="step">
                            <span class="num">{"1"}</span>
                            <div><b>{"Requirements"}</b><p>{"Page goal + audience + CTA + reference examples."}</p></div>
                        </div>
                        <div class="step">
                            <span class="num">{"2"}</span>
                            <div><b>{"Content structure"}</b><p>{"Section ordering that guides the visitor to a decision."}</p></div>
                        </div>
                        <div class="step">
                            <span class="num">{"3"}</span>
                            <div><b>{"Build and polish"}</b><p>{"Responsive + contrast + speed + UI touches."}</p></div>
                        </div>
                        <div class="step">
                            <span class="num">{"4"}</span>
                            <div><b>{"Deploy and document"}</b><p>{"Pages + DNS + a short handover file."}</p></div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section" id="faq">
                <div class="wrap" data-reveal="">
                    <div class="sec-head">
                        <h2>{"FAQ"}</h2>
                        <p>{"Short and direct."}</p>
                    </div>

                    <div class="faq">
                        <FaqItem question="Is the design fully responsive?">
                            <p>{"Yes. Correct breakpoints, readable type and clear contrast on every screen."}</p>
                        </FaqItem>
                        <FaqItem question="Can it be hosted for free?">
                            <p>{"Yes, via GitHub Pages or Cloudflare Pages at no cost."}</p>
                        </FaqItem>
                        <FaqItem question="What do you need to start?">
                            <p>{"Business name, services, WhatsApp number, and links to examples you like."}</p>
                        </FaqItem>
                    </div>
                </div>
            </section>

            <section class="section" id="contact">
                <div class="wrap" data-reveal="">
                    <div class="contact-card">
                        <div class="sec-head">
                            <h2>{"Get in touch"}</h2>
                            <p>{"Fastest channel: WhatsApp, with a ready message to scope things instantly."}</p>
                        </div>

                        <div class="contact-grid">
                            <div class="contact-box">
                                <b>{"WhatsApp"}</b>
                                <p>{"Opens with a ready message. Change the number in the config."}</p>
                                <a class="btn primary" href={(*wa).clone()} target="_blank" rel="noreferrer">
                                    {"Open WhatsApp"}
                                </a>
                            </div>

                            <div class="contact-box">
                                <b>{"Email"}</b>
                                <p>{config::CONTACT_EMAIL}</p>
                                <a class="btn ghost" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                    {"Send an email"}
                                </a>
                            </div>
                        </div>

                        <div class="mini-note">
                            <span class="badge">{"Realistic guarantee"}</span>
                            <span>{"Clear delivery, testable, no overselling."}</span>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="wrap foot">
                    <span>{"© 2025 ICODE"}</span>
                    <button class="to-top" type="button" onclick={on_to_top.clone()}>{"Back to top"}</button>
                </div>
            </footer>

            <button class="float-up" type="button" aria-label="To the top" onclick={on_to_top}>{"↑"}</button>
        </div>
    }
}

const PAGE_CSS: &str = r#"
:root, [data-theme="dark"] {
    --bg: #0b0d12;
    --panel: #11141c;
    --ink: #eef1f7;
    --muted: #9aa3b5;
    --line: rgba(255, 255, 255, 0.09);
    --accent: #7eb2ff;
    --accent-2: #9d7bff;
}
[data-theme="light"] {
    --bg: #f6f7fb;
    --panel: #ffffff;
    --ink: #171b26;
    --muted: #5a6373;
    --line: rgba(10, 14, 25, 0.1);
    --accent: #2f6fe0;
    --accent-2: #7346e6;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--bg);
    color: var(--ink);
    font-family: 'Inter', system-ui, sans-serif;
    line-height: 1.55;
}
.wrap { max-width: 1100px; margin: 0 auto; padding: 0 1.25rem; }

.bg { position: fixed; inset: 0; z-index: -1; overflow: hidden; }
.orb { position: absolute; width: 40vw; height: 40vw; border-radius: 50%; filter: blur(90px); opacity: 0.25; }
.o1 { background: var(--accent); top: -10vw; right: -10vw; }
.o2 { background: var(--accent-2); bottom: -15vw; left: -10vw; }
.grid-lines {
    position: absolute; inset: 0;
    background-image:
        linear-gradient(var(--line) 1px, transparent 1px),
        linear-gradient(90deg, var(--line) 1px, transparent 1px);
    background-size: 48px 48px;
    mask-image: radial-gradient(ellipse at top, black 30%, transparent 75%);
}

[data-reveal] {
    opacity: 0;
    transform: translateY(14px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
[data-reveal].in { opacity: 1; transform: none; }

.topbar { position: sticky; top: 0; z-index: 10; backdrop-filter: blur(10px); border-bottom: 1px solid var(--line); }
.bar { display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 0.7rem 1.25rem; }
.brand { display: flex; align-items: center; gap: 0.6rem; text-decoration: none; color: var(--ink); }
.mark {
    width: 38px; height: 38px; display: grid; place-items: center;
    border: 1px solid var(--line); border-radius: 10px; cursor: pointer;
}
.cube {
    width: 14px; height: 14px; border-radius: 3px;
    background: linear-gradient(135deg, var(--accent), var(--accent-2));
}
.btxt { display: flex; flex-direction: column; line-height: 1.15; }
.btxt b { font-size: 1rem; letter-spacing: 0.08em; }
.btxt span { font-size: 0.7rem; color: var(--muted); }
.nav { display: flex; gap: 1.1rem; }
.nav a { color: var(--muted); text-decoration: none; font-size: 0.92rem; }
.nav a:hover { color: var(--ink); }
.actions { display: flex; align-items: center; gap: 0.55rem; }
.icon-btn {
    width: 36px; height: 36px; border-radius: 9px; cursor: pointer;
    border: 1px solid var(--line); background: transparent; color: var(--ink); font-size: 1rem;
}
.burger { display: none; }
.burger .lines, .burger .lines::before, .burger .lines::after {
    content: ''; display: block; width: 16px; height: 2px; background: var(--ink); border-radius: 2px; position: relative;
}
.burger .lines::before { position: absolute; top: -5px; }
.burger .lines::after { position: absolute; top: 5px; }

.btn {
    display: inline-block; padding: 0.6rem 1.1rem; border-radius: 10px; cursor: pointer;
    font-size: 0.92rem; text-decoration: none; border: 1px solid var(--line); color: var(--ink);
    background: transparent;
}
.btn.primary {
    background: linear-gradient(135deg, var(--accent), var(--accent-2));
    border: none; color: #fff;
}
.btn.ghost:hover { border-color: var(--accent); }
.btn.wide { width: 100%; text-align: center; }

.drawer {
    position: fixed; inset: 0; background: rgba(5, 7, 12, 0.55);
    opacity: 0; pointer-events: none; transition: opacity 0.25s ease; z-index: 20;
}
.drawer.open { opacity: 1; pointer-events: auto; }
.drawer-card {
    position: absolute; top: 0; right: 0; height: 100%; width: min(78vw, 320px);
    background: var(--panel); border-left: 1px solid var(--line);
    display: flex; flex-direction: column; gap: 0.4rem; padding: 1.2rem;
}
.dlink { color: var(--ink); text-decoration: none; padding: 0.55rem 0.4rem; border-radius: 8px; }
.dlink:hover { background: var(--line); }

.hero { padding: 4.5rem 0 3rem; }
.hero-grid { display: grid; grid-template-columns: 1.15fr 0.85fr; gap: 2rem; align-items: start; }
.kicker { display: flex; align-items: center; gap: 0.5rem; color: var(--muted); font-size: 0.85rem; }
.dot { width: 8px; height: 8px; border-radius: 50%; background: var(--accent); }
h1 { font-size: clamp(1.9rem, 4.2vw, 3rem); line-height: 1.15; margin: 0.6rem 0; }
.grad {
    background: linear-gradient(90deg, var(--accent), var(--accent-2));
    -webkit-background-clip: text; background-clip: text; color: transparent;
}
.sub { color: var(--muted); max-width: 46ch; }
.hero-ctas { display: flex; gap: 0.7rem; margin: 1.1rem 0; }
.proof { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.9rem; margin-top: 1.4rem; }
.proof-item { border: 1px solid var(--line); border-radius: 12px; padding: 0.7rem 0.85rem; }
.proof-item b { display: block; font-size: 0.88rem; }
.proof-item span { color: var(--muted); font-size: 0.78rem; }

.hero-card {
    --mx: 50%;
    --my: 50%;
    position: relative; border: 1px solid var(--line); border-radius: 16px;
    background:
        radial-gradient(420px circle at var(--mx) var(--my), rgba(126, 178, 255, 0.14), transparent 60%),
        var(--panel);
    padding: 1.1rem;
}
.card-head { display: flex; justify-content: space-between; align-items: start; gap: 0.6rem; }
.card-title { font-weight: 700; }
.card-hint { color: var(--muted); font-size: 0.8rem; }
.chip {
    font-size: 0.72rem; padding: 0.25rem 0.55rem; border-radius: 999px;
    border: 1px solid var(--accent); color: var(--accent); white-space: nowrap;
}
.card-list { display: flex; flex-direction: column; gap: 0.75rem; margin: 1rem 0; }
.row { display: flex; gap: 0.6rem; align-items: start; }
.row b { font-size: 0.9rem; }
.row p { margin: 0.1rem 0 0; color: var(--muted); font-size: 0.8rem; }
.check { color: var(--accent); }
.card-foot { display: flex; flex-direction: column; gap: 0.55rem; }
.tiny { color: var(--muted); font-size: 0.72rem; margin: 0; }

.secret {
    display: none; margin-top: 1rem; border-top: 1px dashed var(--line); padding-top: 0.8rem;
}
.secret.show { display: block; }
.secret-title { font-size: 0.8rem; letter-spacing: 0.06em; color: var(--accent); }
.secret-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; margin: 0.6rem 0; }
.metric { display: flex; justify-content: space-between; gap: 0.5rem; font-size: 0.8rem; }
.metric span { color: var(--muted); }
.secret-hint { color: var(--muted); font-size: 0.7rem; }

.section { padding: 3rem 0; }
.sec-head h2 { margin: 0 0 0.3rem; font-size: 1.6rem; }
.sec-head p { margin: 0 0 1.4rem; color: var(--muted); }
.grid3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.card { border: 1px solid var(--line); border-radius: 14px; padding: 1rem 1.1rem; background: var(--panel); }
.card h3 { margin: 0 0 0.4rem; font-size: 1.05rem; }
.card p { margin: 0; color: var(--muted); font-size: 0.88rem; }
.tags { display: flex; gap: 0.4rem; flex-wrap: wrap; margin-top: 0.7rem; }
.tags span {
    font-size: 0.7rem; color: var(--muted); border: 1px solid var(--line);
    border-radius: 999px; padding: 0.2rem 0.5rem;
}

.steps { display: grid; gap: 0.9rem; }
.step { display: flex; gap: 0.85rem; align-items: start; border: 1px solid var(--line); border-radius: 12px; padding: 0.8rem 1rem; background: var(--panel); }
.num {
    width: 28px; height: 28px; border-radius: 50%; display: grid; place-items: center;
    background: linear-gradient(135deg, var(--accent), var(--accent-2)); color: #fff; font-size: 0.85rem;
}
.step p { margin: 0.15rem 0 0; color: var(--muted); font-size: 0.85rem; }

.faq { display: flex; flex-direction: column; gap: 0.6rem; }
.faq-item { border: 1px solid var(--line); border-radius: 12px; background: var(--panel); overflow: hidden; }
.faq-question {
    width: 100%; display: flex; justify-content: space-between; align-items: center;
    background: none; border: none; color: var(--ink); padding: 0.85rem 1rem; cursor: pointer; font-size: 0.95rem;
}
.faq-answer { display: none; padding: 0 1rem 0.9rem; color: var(--muted); font-size: 0.88rem; }
.faq-item.open .faq-answer { display: block; }
.toggle-icon { color: var(--accent); }

.contact-card { border: 1px solid var(--line); border-radius: 18px; background: var(--panel); padding: 1.6rem; }
.contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.contact-box { border: 1px solid var(--line); border-radius: 12px; padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; align-items: start; }
.contact-box p { margin: 0; color: var(--muted); font-size: 0.85rem; }
.mini-note { display: flex; align-items: center; gap: 0.6rem; margin-top: 1.1rem; color: var(--muted); font-size: 0.85rem; }
.badge { border: 1px solid var(--accent); color: var(--accent); border-radius: 999px; padding: 0.2rem 0.6rem; font-size: 0.72rem; }

.footer { border-top: 1px solid var(--line); padding: 1.2rem 0 1.4rem; color: var(--muted); font-size: 0.85rem; }
.foot { display: flex; justify-content: space-between; align-items: center; }
.to-top { background: none; border: none; color: var(--accent); cursor: pointer; font-size: 0.85rem; }
.float-up {
    position: fixed; bottom: 1.2rem; left: 1.2rem; width: 42px; height: 42px; border-radius: 50%;
    border: 1px solid var(--line); background: var(--panel); color: var(--ink); cursor: pointer; z-index: 15;
}

@media (max-width: 860px) {
    .hero-grid { grid-template-columns: 1fr; }
    .proof { grid-template-columns: 1fr; }
    .grid3 { grid-template-columns: 1fr; }
    .contact-grid { grid-template-columns: 1fr; }
    .nav { display: none; }
    .burger { display: grid; place-items: center; }
}
"#;
