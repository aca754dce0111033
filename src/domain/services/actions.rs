use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::infrastructure::api::ChatClient;

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            match event.unwrap() {
                Action::SubmitQuery(prompt) => {
                    // The client never fails; whatever happened comes back as
                    // a reply the UI renders like any other.
                    tokio::spawn(async move {
                        let reply = ChatClient::default()
                            .send_query(&prompt.history, &prompt.query)
                            .await;

                        return worker_tx.send(Event::ChatReply(reply));
                    });
                }
            }
        }
    }
}
