use yew::prelude::*;

use crate::components::contact_form::ContactForm;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="landing">
            <style>
                {r#"
                    .top-header {
                        position: sticky;
                        top: 0;
                        padding: 1rem 1.5rem;
                        background: #111;
                        z-index: 10;
                    }
                    .top-header .logo {
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .hero {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        text-align: center;
                        background: #1a1a1a;
                        color: #fff;
                    }
                    .cta-button {
                        background: #a8b720;
                        color: #fff;
                        padding: 0.9rem 2rem;
                        border-radius: 6px;
                        text-decoration: none;
                    }
                "#}
            </style>
            <header class="top-header">
                <a class="logo" href="#home">{"UrbanMood"}</a>
            </header>
            <section id="home" class="hero">
                <h1>{"Entrená en UrbanMood"}</h1>
                <a class="cta-button" href="#contacto">{"Contactanos"}</a>
            </section>
            <ContactForm />
        </main>
    }
}
