use log::{error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    anchor_link::AnchorLink,
    contact_form::ContactForm,
    discount_calculator::DiscountCalculator,
    stats_section::StatsSection,
    success_modal::{ModalState, SuccessModal},
};
use crate::config;
use crate::navigation;
use crate::watcher::{VisibilityWatcher, WatchMode, WatchOptions};

const ENTRANCE_TARGETS: &str = ".service-card, .testimonial-card, .benefit-item";

fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in styles {
        if style.set_property(property, value).is_err() {
            warn!("Could not set {} on animated element", property);
        }
    }
}

fn reveal(element: Element) {
    if let Ok(element) = element.dyn_into::<HtmlElement>() {
        set_styles(&element, &[("opacity", "1"), ("transform", "translateY(0)")]);
    }
}

/// Hides every card-like element and fades each in when it scrolls into
/// view. Targets stay observed for the lifetime of the page.
fn start_entrance_animations() -> Option<VisibilityWatcher> {
    let document = web_sys::window()?.document()?;
    let options = WatchOptions {
        threshold: config::ENTRANCE_THRESHOLD,
        root_margin: Some(config::ENTRANCE_ROOT_MARGIN),
        mode: WatchMode::Perpetual,
    };
    let watcher = match VisibilityWatcher::new(options, reveal) {
        Ok(watcher) => watcher,
        Err(e) => {
            error!("Entrance animations disabled: {:?}", e);
            return None;
        }
    };

    let targets = document.query_selector_all(ENTRANCE_TARGETS).ok()?;
    for index in 0..targets.length() {
        let Some(element) = targets.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        set_styles(
            &element,
            &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", "opacity 0.6s ease, transform 0.6s ease"),
            ],
        );
        watcher.observe(&element);
    }
    Some(watcher)
}

static SERVICES: [(&str, &str, &str); 6] = [
    ("fas fa-search", "SEO", "Posicione sua marca no topo do Google com estratégias de otimização comprovadas."),
    ("fas fa-bullhorn", "Tráfego Pago", "Campanhas no Google Ads e Meta Ads focadas em retorno sobre investimento."),
    ("fas fa-hashtag", "Redes Sociais", "Gestão completa de perfis com conteúdo que engaja e converte."),
    ("fas fa-pen-nib", "Marketing de Conteúdo", "Blog, e-books e newsletters que educam e atraem clientes."),
    ("fas fa-envelope-open-text", "E-mail Marketing", "Automação de fluxos que nutrem leads até a compra."),
    ("fas fa-chart-line", "Análise de Dados", "Relatórios claros para decisões baseadas em números reais."),
];

static TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Carla Mendes", "CEO, Loja Bella", "Em seis meses nossas vendas online triplicaram. Atendimento impecável!"),
    ("Rafael Lima", "Diretor, TechNova", "A equipe entende de verdade de performance. Nosso custo por lead caiu 40%."),
    ("Juliana Rocha", "Fundadora, Café Aroma", "Finalmente temos uma presença digital à altura da nossa marca."),
];

static BENEFITS: [(&str, &str, &str); 4] = [
    ("fas fa-bullseye", "Foco em Resultados", "Metas claras e acompanhamento semanal."),
    ("fas fa-users", "Equipe Especializada", "Profissionais certificados em cada canal."),
    ("fas fa-file-contract", "Sem Fidelidade", "Contratos flexíveis, sem multa de cancelamento."),
    ("fas fa-headset", "Suporte Dedicado", "Um gerente de conta exclusivo para você."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let modal = use_state_eq(ModalState::default);

    {
        let hero_ref = hero_ref.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(hero) = hero_ref.cast::<HtmlElement>() {
                let transform = navigation::parallax_transform(navigation::current_scroll_y());
                set_styles(&hero, &[("transform", transform.as_str())]);
            }
        });
    }

    use_effect_with_deps(
        move |_| {
            let watcher = start_entrance_animations();
            move || drop(watcher)
        },
        (),
    );

    let on_form_success = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Visible))
    };

    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Hidden))
    };

    html! {
        <main class="landing-page">
            <section id="inicio" class="hero" ref={hero_ref}>
                <div class="container hero-content">
                    <h1>{"Transforme sua presença digital em resultados reais"}</h1>
                    <p class="hero-subtitle">
                        {"Estratégias de marketing digital sob medida para empresas que querem crescer de verdade."}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#contato" class={classes!("btn", "btn-primary")}>
                            {"Fale Conosco"}
                        </AnchorLink>
                        <AnchorLink href="#servicos" class={classes!("btn", "btn-secondary")}>
                            {"Nossos Serviços"}
                        </AnchorLink>
                    </div>
                </div>
            </section>

            <section id="servicos" class="services">
                <div class="container">
                    <h2 class="section-title">{"Nossos Serviços"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <div class="service-card">
                                <i class={*icon}></i>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="depoimentos" class="testimonials">
                <div class="container">
                    <h2 class="section-title">{"O que dizem nossos clientes"}</h2>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|(name, role, quote)| html! {
                            <div class="testimonial-card">
                                <p class="testimonial-text">{ format!("\u{201c}{}\u{201d}", quote) }</p>
                                <div class="testimonial-author">
                                    <strong>{ *name }</strong>
                                    <span>{ *role }</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="beneficios" class="benefits">
                <div class="container">
                    <h2 class="section-title">{"Por que escolher a MarketingPro?"}</h2>
                    <div class="benefits-grid">
                        { for BENEFITS.iter().map(|(icon, title, text)| html! {
                            <div class="benefit-item">
                                <i class={*icon}></i>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="calculadora" class="calculator">
                <div class="container">
                    <h2 class="section-title">{"Calcule seu desconto"}</h2>
                    <p class="section-subtitle">{"Novos clientes ganham 15% de desconto no primeiro mês."}</p>
                    <DiscountCalculator />
                </div>
            </section>

            <StatsSection />

            <section id="contato" class="contact">
                <div class="container">
                    <h2 class="section-title">{"Entre em Contato"}</h2>
                    <p class="section-subtitle">{"Conte sobre o seu negócio e receba uma proposta personalizada."}</p>
                    <ContactForm on_success={on_form_success} />
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"© 2024 MarketingPro. Todos os direitos reservados."}</p>
                </div>
            </footer>

            <SuccessModal state={*modal} on_close={on_modal_close} />
        </main>
    }
}
