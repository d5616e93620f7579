// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timing for the visible notification.
//!
//! [`NotificationTimer`] is a two-state machine (hidden / visible) that owns at
//! most one [`DismissTimer`]. The timer is the only handle to the deferred
//! dismissal task, so dropping it (on hide, on re-trigger, on manual dismiss,
//! or when the owner is torn down) aborts the task. Each armed timer carries a
//! fresh [`TimerToken`]; an expiry whose token is not the outstanding one is
//! ignored, so a task that slipped past its abort can never dismiss twice.

use super::request::RequestId;
use iced::task;
use std::fmt;
use std::time::Duration;

/// Generation number identifying one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Scoped handle to a scheduled dismissal.
///
/// Dropping the handle cancels the deferred task. Cancelling a task that has
/// already completed, or that was never attached, is a no-op.
pub struct DismissTimer {
    token: TimerToken,
    abort: Option<task::Handle>,
}

impl DismissTimer {
    fn new(token: TimerToken) -> Self {
        Self { token, abort: None }
    }

    /// Returns the token the deferred task will report on expiry.
    #[must_use]
    pub fn token(&self) -> TimerToken {
        self.token
    }

    /// Returns whether a deferred task is bound to this timer.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.abort.is_some()
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
    }
}

impl fmt::Debug for DismissTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissTimer")
            .field("token", &self.token)
            .field("scheduled", &self.is_scheduled())
            .finish()
    }
}

/// Outcome of reconciling the timer with the caller's request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed; no task to schedule.
    Unchanged,
    /// A new visible period started; schedule a deferred expiry for `token`.
    Armed(TimerToken),
    /// The notification left the visible state; any pending timer was cancelled.
    Hidden,
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Hidden,
    Visible {
        request: RequestId,
        /// `None` once the dismissal for this period has been delivered.
        pending: Option<DismissTimer>,
    },
}

/// Visibility lifecycle of a single notification.
#[derive(Debug, Default)]
pub struct NotificationTimer {
    phase: Phase,
    generation: u64,
}

impl NotificationTimer {
    /// Creates a timer in the hidden state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles with the caller's visibility flag and request identity.
    ///
    /// A request with a new identity while visible ends the current period and
    /// starts a new one; the previous timer is cancelled without dismissing.
    pub fn sync(&mut self, visible: bool, request: RequestId) -> Transition {
        let current = match &self.phase {
            Phase::Visible { request, .. } => Some(*request),
            Phase::Hidden => None,
        };

        match (current, visible) {
            (None, false) => Transition::Unchanged,
            (Some(_), false) => {
                self.cancel();
                Transition::Hidden
            }
            (Some(current), true) if current == request => Transition::Unchanged,
            (current, true) => {
                if current.is_some() {
                    tracing::debug!(?request, "notification re-triggered while visible");
                }
                // Drop the previous timer before arming so only one is ever outstanding.
                self.phase = Phase::Hidden;
                Transition::Armed(self.arm(request))
            }
        }
    }

    /// Binds the deferred task for `token` to the outstanding timer.
    ///
    /// A handle for any other token is aborted straight away.
    pub fn attach(&mut self, token: TimerToken, handle: task::Handle) {
        match &mut self.phase {
            Phase::Visible {
                pending: Some(timer),
                ..
            } if timer.token == token => {
                if let Some(previous) = timer.abort.replace(handle) {
                    previous.abort();
                }
            }
            _ => handle.abort(),
        }
    }

    /// Handles the deferred expiry of `token`.
    ///
    /// Returns `true` when the dismissal callback must run.
    pub fn expire(&mut self, token: TimerToken) -> bool {
        if let Phase::Visible { pending, .. } = &mut self.phase {
            if pending.as_ref().is_some_and(|timer| timer.token == token) {
                pending.take();
                tracing::debug!(?token, "dismiss timer expired");
                return true;
            }
        }
        tracing::trace!(?token, "ignoring stale dismiss timer");
        false
    }

    /// Handles an explicit dismissal.
    ///
    /// Cancels the pending timer and returns `true` when the dismissal
    /// callback must run. Returns `false` if hidden or already dismissed.
    pub fn dismiss(&mut self) -> bool {
        if let Phase::Visible { pending, .. } = &mut self.phase {
            if let Some(timer) = pending.take() {
                tracing::debug!(token = ?timer.token, "notification dismissed manually");
                return true;
            }
        }
        false
    }

    /// Cancels any pending timer and returns to the hidden state.
    ///
    /// Safe to call at any time.
    pub fn cancel(&mut self) {
        if let Phase::Visible {
            pending: Some(timer),
            ..
        } = &self.phase
        {
            tracing::debug!(token = ?timer.token, "dismiss timer cancelled");
        }
        self.phase = Phase::Hidden;
    }

    /// Returns whether a notification is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    /// Returns the token of the outstanding timer, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<TimerToken> {
        match &self.phase {
            Phase::Visible {
                pending: Some(timer),
                ..
            } => Some(timer.token),
            _ => None,
        }
    }

    fn arm(&mut self, request: RequestId) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.phase = Phase::Visible {
            request,
            pending: Some(DismissTimer::new(token)),
        };
        tracing::debug!(?request, ?token, "dismiss timer armed");
        token
    }
}

/// Resolves to `token` once `delay` has elapsed.
pub async fn deferred(delay: Duration, token: TimerToken) -> TimerToken {
    tokio::time::sleep(delay).await;
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Task;

    fn handle() -> task::Handle {
        let (_task, handle) = Task::perform(std::future::pending::<()>(), |()| ()).abortable();
        handle
    }

    fn armed(timer: &mut NotificationTimer, request: RequestId) -> TimerToken {
        match timer.sync(true, request) {
            Transition::Armed(token) => token,
            other => panic!("expected Armed, got {other:?}"),
        }
    }

    #[test]
    fn new_timer_is_hidden() {
        let timer = NotificationTimer::new();
        assert!(!timer.is_visible());
        assert!(timer.pending_token().is_none());
    }

    #[test]
    fn showing_arms_a_single_timer() {
        let mut timer = NotificationTimer::new();
        let id = RequestId::new();
        let token = armed(&mut timer, id);

        assert!(timer.is_visible());
        assert_eq!(timer.pending_token(), Some(token));
        // Re-rendering the same request must not schedule again.
        assert_eq!(timer.sync(true, id), Transition::Unchanged);
        assert_eq!(timer.pending_token(), Some(token));
    }

    #[test]
    fn expiry_fires_once() {
        let mut timer = NotificationTimer::new();
        let token = armed(&mut timer, RequestId::new());

        assert!(timer.expire(token));
        assert!(!timer.expire(token));
        assert!(timer.pending_token().is_none());
    }

    #[test]
    fn manual_dismiss_cancels_pending_expiry() {
        let mut timer = NotificationTimer::new();
        let token = armed(&mut timer, RequestId::new());

        assert!(timer.dismiss());
        assert!(timer.pending_token().is_none());
        assert!(!timer.expire(token));
    }

    #[test]
    fn dismiss_after_expiry_is_noop() {
        let mut timer = NotificationTimer::new();
        let token = armed(&mut timer, RequestId::new());

        assert!(timer.expire(token));
        assert!(!timer.dismiss());
    }

    #[test]
    fn hiding_before_delay_prevents_expiry() {
        let mut timer = NotificationTimer::new();
        let id = RequestId::new();
        let token = armed(&mut timer, id);

        assert_eq!(timer.sync(false, id), Transition::Hidden);
        assert!(!timer.is_visible());
        assert!(!timer.expire(token));
    }

    #[test]
    fn hide_while_hidden_is_unchanged() {
        let mut timer = NotificationTimer::new();
        assert_eq!(timer.sync(false, RequestId::new()), Transition::Unchanged);
    }

    #[test]
    fn new_request_while_visible_replaces_timer() {
        let mut timer = NotificationTimer::new();
        let first = armed(&mut timer, RequestId::new());
        let second = armed(&mut timer, RequestId::new());

        assert_ne!(first, second);
        assert!(!timer.expire(first));
        assert!(timer.expire(second));
    }

    #[test]
    fn showing_again_after_hide_starts_new_period() {
        let mut timer = NotificationTimer::new();
        let id = RequestId::new();
        let first = armed(&mut timer, id);
        assert!(timer.expire(first));
        assert_eq!(timer.sync(false, id), Transition::Hidden);

        let second = armed(&mut timer, id);
        assert_ne!(first, second);
        assert!(timer.dismiss());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = NotificationTimer::new();
        timer.cancel();
        let token = armed(&mut timer, RequestId::new());
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_visible());
        assert!(!timer.expire(token));
    }

    #[test]
    fn cancel_aborts_attached_task() {
        let mut timer = NotificationTimer::new();
        let token = armed(&mut timer, RequestId::new());
        let task_handle = handle();
        let probe = task_handle.clone();
        timer.attach(token, task_handle);

        timer.cancel();
        assert!(probe.is_aborted());
    }

    #[test]
    fn manual_dismiss_aborts_attached_task() {
        let mut timer = NotificationTimer::new();
        let token = armed(&mut timer, RequestId::new());
        let task_handle = handle();
        let probe = task_handle.clone();
        timer.attach(token, task_handle);

        assert!(timer.dismiss());
        assert!(probe.is_aborted());
    }

    #[test]
    fn stale_handle_is_aborted_on_attach() {
        let mut timer = NotificationTimer::new();
        let stale = armed(&mut timer, RequestId::new());
        let _current = armed(&mut timer, RequestId::new());
        let task_handle = handle();
        let probe = task_handle.clone();

        timer.attach(stale, task_handle);
        assert!(probe.is_aborted());
    }

    #[test]
    fn dropping_owner_aborts_pending_task() {
        let mut timer = NotificationTimer::new();
        let token = armed(&mut timer, RequestId::new());
        let task_handle = handle();
        let probe = task_handle.clone();
        timer.attach(token, task_handle);

        drop(timer);
        assert!(probe.is_aborted());
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_resolves_at_delay_boundary() {
        let start = tokio::time::Instant::now();
        let token = TimerToken(7);

        let fired = deferred(Duration::from_millis(5000), token).await;

        assert_eq!(fired, token);
        assert!(start.elapsed() >= Duration::from_millis(5000));
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_does_not_resolve_early() {
        let early = tokio::time::timeout(
            Duration::from_millis(4999),
            deferred(Duration::from_millis(5000), TimerToken(1)),
        )
        .await;
        assert!(early.is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            ShowNew,
            ShowSame,
            Hide,
            ExpireCurrent,
            ExpireStale,
            Dismiss,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::ShowNew),
                Just(Op::ShowSame),
                Just(Op::Hide),
                Just(Op::ExpireCurrent),
                Just(Op::ExpireStale),
                Just(Op::Dismiss),
            ]
        }

        proptest! {
            #[test]
            fn at_most_one_dismissal_per_visible_period(ops in proptest::collection::vec(op(), 0..64)) {
                let mut timer = NotificationTimer::new();
                let mut request = RequestId::new();
                let mut issued: Vec<TimerToken> = Vec::new();
                let mut dismissals_this_period = 0_u32;

                for op in ops {
                    match op {
                        Op::ShowNew | Op::ShowSame => {
                            if matches!(op, Op::ShowNew) {
                                request = RequestId::new();
                            }
                            if let Transition::Armed(token) = timer.sync(true, request) {
                                issued.push(token);
                                dismissals_this_period = 0;
                            }
                        }
                        Op::Hide => {
                            timer.sync(false, request);
                            dismissals_this_period = 0;
                        }
                        Op::ExpireCurrent => {
                            if let Some(token) = issued.last().copied() {
                                if timer.expire(token) {
                                    dismissals_this_period += 1;
                                }
                            }
                        }
                        Op::ExpireStale => {
                            for token in issued.iter().rev().skip(1).copied() {
                                prop_assert!(!timer.expire(token));
                            }
                        }
                        Op::Dismiss => {
                            if timer.dismiss() {
                                dismissals_this_period += 1;
                            }
                        }
                    }
                    prop_assert!(dismissals_this_period <= 1);
                    if dismissals_this_period == 1 {
                        prop_assert!(timer.pending_token().is_none());
                    }
                }
            }
        }
    }
}
