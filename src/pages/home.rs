use chrono::Datelike;
use yew::prelude::*;

use crate::components::eco_fact_widget::EcoFactWidget;
use crate::components::product_card::ProductCard;
use crate::content::{self, BRAND, CONTACT_EMAIL, IMPACT_POINTS, INSTAGRAM_URL, PRODUCTS};

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1>{"Sustainable Fun,"}<br />{"Artistic Play."}</h1>
                <p>{"Crafted with care, designed for a better world."}</p>
                <a href={content::nav_href("products")} class="cta-button">{"Explore Collection"}</a>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <h2>{"Our Story: From Plastic to Purpose"}</h2>
            <p>
                {"Resin Era was born from a simple idea: playtime shouldn't come at the cost of our planet. We handcraft beautiful, durable toys from eco-friendly resin, offering a sustainable alternative to mass-produced plastic toys that harm our environment."}
            </p>
            <img src="/assets/about-bg.jpg" alt="A child playing with a resin toy" />
        </section>
    }
}

#[function_component(Products)]
fn products() -> Html {
    html! {
        <section id="products" class="products">
            <h2>{"Our Sustainable Creations"}</h2>
            <div class="products__grid">
                { for PRODUCTS.iter().map(|product| html! {
                    <ProductCard key={product.name} product={*product} />
                }) }
            </div>
        </section>
    }
}

#[function_component(Impact)]
fn impact() -> Html {
    html! {
        <section id="impact" class="impact">
            <h2>{"Our Impact"}</h2>
            <p class="impact__lead">
                {"Every Resin Era toy you choose helps reduce plastic waste and supports a cleaner planet for future generations."}
            </p>
            <div class="impact__grid">
                { for IMPACT_POINTS.iter().map(|point| html! {
                    <div class="impact__point" key={point.title}>
                        <h3>{point.title}</h3>
                        <p>{point.body}</p>
                        <img src={point.image} alt={point.alt} />
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <h2>{"Let's Connect"}</h2>
            <p>{"Have a question or want to collaborate? Reach out to us."}</p>
            <div class="contact__links">
                <a href={format!("mailto:{}", CONTACT_EMAIL)} class="cta-button">{"Email Us"}</a>
                <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="cta-button instagram">
                    {"Instagram"}
                </a>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <p>{format!("© {} {}. All rights reserved.", year, BRAND)}</p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <Hero />
            <About />
            <Products />
            <Impact />
            <EcoFactWidget />
            <Contact />
            <Footer />
            <style>
                {r#"
                .landing {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2937;
                }
                .landing section {
                    scroll-margin-top: 64px;
                }
                .landing h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1rem;
                }
                .cta-button {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    background: #2563eb;
                    color: #ffffff;
                    border: none;
                    border-radius: 9999px;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    box-shadow: 0 8px 20px rgba(37, 99, 235, 0.25);
                    transition: all 0.3s ease;
                }
                .cta-button:hover {
                    background: #1d4ed8;
                    transform: translateY(-2px);
                }
                .hero {
                    position: relative;
                    height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-image: url('/assets/hero-bg.jpg');
                    background-size: cover;
                    background-position: center;
                }
                .hero__overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .hero__content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    color: #ffffff;
                    padding: 0 1.5rem;
                }
                .hero__content h1 {
                    font-size: 3.5rem;
                    font-weight: 800;
                    line-height: 1.1;
                    margin-bottom: 1rem;
                }
                .hero__content p {
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                }
                .about, .contact {
                    padding: 5rem 1.5rem;
                    background: #f9fafb;
                    text-align: center;
                }
                .about p, .contact p {
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    font-size: 1.2rem;
                    color: #4b5563;
                }
                .about img {
                    width: 100%;
                    max-width: 32rem;
                    border-radius: 24px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                }
                .products {
                    padding: 5rem 1.5rem;
                    background: #ffffff;
                }
                .products__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 3rem auto 0;
                }
                .product-card {
                    background: #f9fafb;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                }
                .product-card:hover {
                    transform: scale(1.05);
                }
                .product-card img {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                }
                .product-card__body {
                    padding: 1.5rem;
                }
                .product-card__body h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }
                .product-card__body p {
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .impact {
                    padding: 5rem 1.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    text-align: center;
                }
                .impact__lead {
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    font-size: 1.2rem;
                }
                .impact__grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: left;
                }
                .impact__point img {
                    width: 100%;
                    border-radius: 16px;
                    margin-top: 1rem;
                }
                .contact__links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .cta-button.instagram {
                    background: #ec4899;
                }
                .footer {
                    background: #1f2937;
                    color: #ffffff;
                    text-align: center;
                    padding: 2rem;
                }
                @media (max-width: 1024px) {
                    .products__grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .hero__content h1 {
                        font-size: 2.5rem;
                    }
                    .products__grid, .impact__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
