// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The toggle itself: one handler for both directions, keyed by the current
//! [`Toggle`](Toggle).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use crate::config::Config;
use crate::csrf::CsrfToken;
use crate::endpoint::{ActionEndpoint, Endpoints};
use crate::error::{Error, Result};
use crate::state::{LikeState, Toggle};
use crate::transport::Transport;
use crate::view::ToggleView;

/// One button and its count.
///
/// All methods take `&self` so that a widget can be shared by `Rc` between
/// its event listener and the futures it spawns. No borrow of the inner
/// state is held across an `.await`.
pub struct LikeToggle<V, T> {
    view: V,
    transport: T,
    endpoints: Endpoints,
    csrf: RefCell<CsrfToken>,
    config: Rc<Config>,
    state: Cell<LikeState>,
    pending: Cell<bool>,
}

impl<V, T> LikeToggle<V, T>
where
    V: ToggleView,
    T: Transport,
{
    pub fn new(
        view: V,
        transport: T,
        endpoints: Endpoints,
        initial: LikeState,
        csrf: CsrfToken,
        config: Rc<Config>,
    ) -> Self {
        LikeToggle {
            view,
            transport,
            endpoints,
            csrf: RefCell::new(csrf),
            config,
            state: Cell::new(initial),
            pending: Cell::new(false),
        }
    }

    pub fn state(&self) -> LikeState {
        self.state.get()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Endpoint the next click will call.
    pub fn action_url(&self) -> Option<&ActionEndpoint> {
        self.endpoints.target(self.state.get().toggle)
    }

    /// Replace the CSRF token, e.g. after the cookie was rotated. Requests
    /// already in flight keep the token they were sent with.
    pub fn set_csrf(&self, csrf: CsrfToken) {
        *self.csrf.borrow_mut() = csrf;
    }

    /// Handle a click: request the transition for the current state and, on
    /// success, display the new state.
    ///
    /// Clicks without an endpoint for the current state, and clicks while a
    /// request is already in flight, return an error without touching the
    /// DOM. Failed requests leave the displayed state as it was and mark the
    /// button as failed until the next click.
    pub async fn click(&self) -> Result<LikeState> {
        let current = self.state.get();

        let url = self
            .endpoints
            .target(current.toggle)
            .ok_or(Error::MissingEndpoint(current.toggle))?;

        if self.pending.replace(true) {
            return Err(Error::Busy);
        }

        let csrf = self.csrf.borrow().clone();

        self.view.set_failed(false, &self.config);
        self.view.set_pending(true, &self.config);

        let result = self
            .transport
            .post(url, &csrf)
            .await
            .and_then(|reply| reply.like_count());

        self.view.set_pending(false, &self.config);
        self.pending.set(false);

        match result {
            Ok(count) => {
                let next = current.advance(count);

                self.state.set(next);
                self.view.render(next, self.endpoints.target(next.toggle), &self.config);

                debug!("{url}: {} -> {} ({count})", current.toggle, next.toggle);

                Ok(next)
            }
            Err(err) => {
                self.view.set_failed(true, &self.config);

                Err(err)
            }
        }
    }

    /// Same as [`click`](LikeToggle::click), but logs instead of returning
    /// errors. Used by DOM listeners, which have nowhere to return to.
    pub async fn click_logged(&self) {
        if let Err(err) = self.click().await {
            if err.is_inert() {
                debug!("click ignored: {err}");
            } else {
                warn!("like toggle failed: {err}");
            }
        }
    }

    /// Side of the toggle currently displayed.
    pub fn toggle(&self) -> Toggle {
        self.state.get().toggle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::executor::block_on;

    use crate::reply::Reply;

    /// Transport double that replays canned replies and records requests.
    #[derive(Default)]
    pub struct MockTransport {
        replies: RefCell<VecDeque<Result<Reply>>>,
        pub sent: RefCell<Vec<(String, String)>>,
    }

    impl MockTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(Reply::new(status, body)));
            self
        }

        pub fn fail(self, err: Error) -> Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }
    }

    /// Suspends once, like a real request would.
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context) -> Poll<()> {
            if self.0 {
                return Poll::Ready(());
            }

            self.0 = true;
            cx.waker().wake_by_ref();

            Poll::Pending
        }
    }

    impl Transport for MockTransport {
        async fn post(&self, url: &ActionEndpoint, csrf: &CsrfToken) -> Result<Reply> {
            self.sent
                .borrow_mut()
                .push((url.to_string(), csrf.header_value().to_owned()));

            YieldNow(false).await;

            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Request("no reply queued".into())))
        }
    }

    /// View double that keeps what a real button would display.
    #[derive(Debug, Default)]
    pub struct MockView {
        pub count: Cell<Option<u32>>,
        pub label: RefCell<Option<String>>,
        pub class: RefCell<Option<String>>,
        pub action: RefCell<Option<String>>,
        pub pending: RefCell<Vec<bool>>,
        pub failed: Cell<bool>,
        pub renders: Cell<usize>,
    }

    impl ToggleView for MockView {
        fn render(&self, state: LikeState, next: Option<&ActionEndpoint>, config: &Config) {
            self.count.set(Some(state.count));
            *self.label.borrow_mut() = Some(config.label(state.toggle).to_owned());
            *self.class.borrow_mut() = Some(config.state_class(state.toggle).to_owned());
            *self.action.borrow_mut() = next.map(ToString::to_string);
            self.renders.set(self.renders.get() + 1);
        }

        fn set_pending(&self, pending: bool, _: &Config) {
            self.pending.borrow_mut().push(pending);
        }

        fn set_failed(&self, failed: bool, _: &Config) {
            self.failed.set(failed);
        }
    }

    fn widget(toggle: Toggle, count: u32, transport: MockTransport) -> LikeToggle<MockView, MockTransport> {
        LikeToggle::new(
            MockView::default(),
            transport,
            Endpoints::new(Some("/posts/3/like/"), Some("/posts/3/unlike/")),
            LikeState::new(toggle, count),
            CsrfToken::new("abc123"),
            Rc::new(Config::default()),
        )
    }

    #[test]
    fn like_scenario() {
        let like = widget(Toggle::Unliked, 2, MockTransport::default().reply(200, r#"{"like_num": 3}"#));

        let state = block_on(like.click()).unwrap();

        assert_eq!(state, LikeState::new(Toggle::Liked, 3));
        assert_eq!(
            *like.transport.sent.borrow(),
            [("/posts/3/like/".to_owned(), "abc123".to_owned())]
        );

        let view = like.view();

        assert_eq!(view.count.get(), Some(3));
        assert_eq!(view.label.borrow().as_deref(), Some("Unlike"));
        assert_eq!(view.class.borrow().as_deref(), Some("unlike-btn"));
        assert_eq!(view.action.borrow().as_deref(), Some("/posts/3/unlike/"));
        assert_eq!(*view.pending.borrow(), [true, false]);
        assert_eq!(like.action_url().map(ActionEndpoint::as_str), Some("/posts/3/unlike/"));
    }

    #[test]
    fn unlike_from_liked() {
        let like = widget(Toggle::Liked, 5, MockTransport::default().reply(200, r#"{"like_num": 4}"#));

        let state = block_on(like.click()).unwrap();

        assert_eq!(state, LikeState::new(Toggle::Unliked, 4));
        assert_eq!(like.transport.sent.borrow()[0].0, "/posts/3/unlike/");
        assert_eq!(like.view().label.borrow().as_deref(), Some("Like"));
    }

    #[test]
    fn parity_after_many_successful_clicks() {
        for initial in [Toggle::Liked, Toggle::Unliked] {
            for clicks in 0..6u32 {
                let mut transport = MockTransport::default();

                for n in 0..clicks {
                    transport = transport.reply(200, &format!(r#"{{"like_num": {n}}}"#));
                }

                let like = widget(initial, 0, transport);

                for _ in 0..clicks {
                    block_on(like.click()).unwrap();
                }

                let expected = if clicks % 2 == 0 { initial } else { initial.flip() };

                assert_eq!(like.toggle(), expected);
                assert_eq!(like.transport.sent.borrow().len(), clicks as usize);
            }
        }
    }

    #[test]
    fn alternates_endpoints() {
        let like = widget(
            Toggle::Unliked,
            0,
            MockTransport::default()
                .reply(200, r#"{"like_num": 1}"#)
                .reply(200, r#"{"like_num": 0}"#)
                .reply(200, r#"{"like_num": 1}"#),
        );

        for _ in 0..3 {
            block_on(like.click()).unwrap();
        }

        let urls: Vec<_> = like.transport.sent.borrow().iter().map(|(url, _)| url.clone()).collect();

        assert_eq!(urls, ["/posts/3/like/", "/posts/3/unlike/", "/posts/3/like/"]);
    }

    #[test]
    fn failures_leave_state_unchanged() {
        let failures = [
            MockTransport::default().fail(Error::Request("offline".into())),
            MockTransport::default().reply(404, "Not Found"),
            MockTransport::default().reply(403, r#"{"like_num": 9}"#),
            MockTransport::default().reply(200, "not json"),
            MockTransport::default().reply(200, r#"{"likes": 9}"#),
        ];

        for transport in failures {
            let like = widget(Toggle::Unliked, 2, transport);

            assert!(block_on(like.click()).is_err());
            assert_eq!(like.state(), LikeState::new(Toggle::Unliked, 2));
            assert_eq!(like.view().renders.get(), 0);
            assert!(like.view().failed.get());
            assert!(!like.is_pending());
        }
    }

    #[test]
    fn next_click_clears_failure() {
        let like = widget(
            Toggle::Unliked,
            2,
            MockTransport::default()
                .reply(500, "")
                .reply(200, r#"{"like_num": 3}"#),
        );

        assert_eq!(block_on(like.click()), Err(Error::Rejected { status: 500 }));
        assert!(like.view().failed.get());

        block_on(like.click()).unwrap();

        assert!(!like.view().failed.get());
        assert_eq!(like.state(), LikeState::new(Toggle::Liked, 3));
    }

    #[test]
    fn missing_endpoint_is_inert() {
        let like = LikeToggle::new(
            MockView::default(),
            MockTransport::default().reply(200, r#"{"like_num": 3}"#),
            Endpoints::new(None, Some("/posts/3/unlike/")),
            LikeState::new(Toggle::Unliked, 2),
            CsrfToken::new("abc123"),
            Rc::new(Config::default()),
        );

        let err = block_on(like.click()).unwrap_err();

        assert_eq!(err, Error::MissingEndpoint(Toggle::Unliked));
        assert!(err.is_inert());
        assert!(like.transport.sent.borrow().is_empty());
        assert!(like.view().pending.borrow().is_empty());
        assert!(!like.view().failed.get());
        assert_eq!(like.view().renders.get(), 0);
    }

    #[test]
    fn click_while_pending_is_ignored() {
        let like = widget(Toggle::Unliked, 2, MockTransport::default().reply(200, r#"{"like_num": 3}"#));

        like.pending.set(true);

        assert_eq!(block_on(like.click()), Err(Error::Busy));
        assert!(like.transport.sent.borrow().is_empty());

        // The request that owns the pending flag is unaffected
        assert!(like.is_pending());
    }

    #[test]
    fn concurrent_clicks_send_one_request() {
        use futures::future::join;

        let like = widget(
            Toggle::Unliked,
            2,
            MockTransport::default()
                .reply(200, r#"{"like_num": 3}"#)
                .reply(200, r#"{"like_num": 2}"#),
        );

        let (first, second) = block_on(join(like.click(), like.click()));

        assert_eq!(first, Ok(LikeState::new(Toggle::Liked, 3)));
        assert_eq!(second, Err(Error::Busy));
        assert_eq!(like.transport.sent.borrow().len(), 1);
    }

    #[test]
    fn missing_csrf_sends_empty_header() {
        let like = widget(Toggle::Unliked, 0, MockTransport::default().reply(200, r#"{"like_num": 1}"#));

        like.set_csrf(CsrfToken::default());
        block_on(like.click()).unwrap();

        assert_eq!(like.transport.sent.borrow()[0].1, "");
    }

    #[test]
    fn rotated_token_reaches_shared_widget() {
        let like = Rc::new(widget(
            Toggle::Unliked,
            2,
            MockTransport::default()
                .reply(200, r#"{"like_num": 3}"#)
                .reply(200, r#"{"like_num": 2}"#),
        ));

        let listener = like.clone();

        block_on(listener.click()).unwrap();

        like.set_csrf(CsrfToken::new("rotated"));

        block_on(listener.click()).unwrap();

        let tokens: Vec<_> = like.transport.sent.borrow().iter().map(|(_, csrf)| csrf.clone()).collect();

        assert_eq!(tokens, ["abc123", "rotated"]);
    }

    #[test]
    fn token_change_mid_request_applies_to_next_click() {
        use futures::future::join;

        let like = widget(
            Toggle::Unliked,
            2,
            MockTransport::default()
                .reply(200, r#"{"like_num": 3}"#)
                .reply(200, r#"{"like_num": 2}"#),
        );

        let rotate = async {
            like.set_csrf(CsrfToken::new("rotated"));
        };

        let (first, ()) = block_on(join(like.click(), rotate));

        assert!(first.is_ok());

        block_on(like.click()).unwrap();

        let tokens: Vec<_> = like.transport.sent.borrow().iter().map(|(_, csrf)| csrf.clone()).collect();

        assert_eq!(tokens, ["abc123", "rotated"]);
    }
}
