use yew::prelude::*;

use crate::content::{Product, PLACEHOLDER_IMAGE};

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let image_failed = use_state(|| false);

    let on_image_error = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            if !*image_failed {
                log::warn!("Product image failed to load, using placeholder");
                image_failed.set(true);
            }
        })
    };

    let src = if *image_failed {
        PLACEHOLDER_IMAGE
    } else {
        props.product.image
    };

    html! {
        <div class="product-card">
            <img src={src} alt={props.product.alt} loading="lazy" onerror={on_image_error} />
            <div class="product-card__body">
                <h3>{props.product.name}</h3>
                <p>{props.product.description}</p>
            </div>
        </div>
    }
}
