use std::rc::Rc;

use kobold::prelude::*;
use like_toggle::component::LikeButton;
use like_toggle::{Config, CsrfToken};

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let csrf = CsrfToken::from_document("csrftoken").unwrap_or_default();
    let csrf = csrf.header_value();

    let config = Rc::new(Config::default().with_labels("いいね", "いいね解除"));

    kobold::start(view! {
        <article>
            <p>"First post"</p>
            <LikeButton liked={false} count={2} like_url="/tweets/1/like/" unlike_url="/tweets/1/unlike/" {csrf} config={config.clone()} />
        </article>
        <article>
            <p>"Second post"</p>
            <LikeButton liked={true} count={5} like_url="/tweets/2/like/" unlike_url="/tweets/2/unlike/" {csrf} config={config} />
        </article>
        <article>
            <p>"Default labels"</p>
            <LikeButton liked={false} count={0} like_url="/tweets/3/like/" unlike_url="/tweets/3/unlike/" {csrf} />
        </article>
    });
}
