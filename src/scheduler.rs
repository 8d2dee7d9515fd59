use crate::logger;
use crate::models::{FeedbackTicket, Verdict};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Holds each verdict on screen for its delay, then reports the ticket back
/// to the UI loop. Pending timers are aborted when the session goes away.
#[derive(Debug)]
pub struct FeedbackScheduler {
    tx: UnboundedSender<FeedbackTicket>,
    pending: Vec<JoinHandle<()>>,
}

impl FeedbackScheduler {
    pub fn new(tx: UnboundedSender<FeedbackTicket>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, verdict: &Verdict) {
        self.pending.retain(|handle| !handle.is_finished());

        let tx = self.tx.clone();
        let ticket = verdict.ticket;
        let hold = verdict.hold;
        logger::log(&format!(
            "Scheduling feedback for session {} (generation {}) in {} ms",
            ticket.session_id,
            ticket.generation,
            hold.as_millis()
        ));

        let handle = tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            if tx.send(ticket).is_err() {
                logger::log("Feedback channel closed, dropping timer");
            }
        });
        self.pending.push(handle);
    }

    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            logger::log(&format!("Cancelling {} feedback timer(s)", self.pending.len()));
        }
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for FeedbackScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn verdict(session_id: u64, generation: u64, hold_ms: u64) -> Verdict {
        Verdict {
            correct: true,
            ticket: FeedbackTicket {
                session_id,
                generation,
            },
            hold: Duration::from_millis(hold_ms),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_delivers_ticket_after_hold() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = FeedbackScheduler::new(tx);
        scheduler.schedule(&verdict(1, 1, 1500));

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.try_recv().is_err());

        let ticket = rx.recv().await.unwrap();
        assert_eq!(ticket.session_id, 1);
        assert_eq!(ticket.generation, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorter_hold_fires_first() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = FeedbackScheduler::new(tx);
        scheduler.schedule(&verdict(1, 1, 1500));
        scheduler.schedule(&verdict(2, 1, 1000));

        assert_eq!(rx.recv().await.unwrap().session_id, 2);
        assert_eq!(rx.recv().await.unwrap().session_id, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timers_never_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = FeedbackScheduler::new(tx);
        scheduler.schedule(&verdict(7, 3, 1000));
        assert_eq!(scheduler.pending(), 1);

        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_scheduler_cancels_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut scheduler = FeedbackScheduler::new(tx);
            scheduler.schedule(&verdict(9, 1, 1000));
        }

        // Sender dropped with the aborted task, so the channel closes empty.
        let next = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert_eq!(next.unwrap(), None);
    }
}
