//! Command dispatch.
//!
//! The dispatcher turns a webhook into a reply. `handle` does the work and
//! reports failures as `FoodtraxError`; `dispatch` is the boundary the HTTP
//! layer calls, which logs any failure and answers with the apology.

use crate::{AppContext, Command, USAGE, WebhookRequest};
use foodtrax_core::{Coordinate, METRO, ProximityEngine, Row, TruckLocationRecord, TruckRecord};
use foodtrax_error::{
    DirectoryErrorKind, DispatchError, DispatchErrorKind, FoodtraxError, FoodtraxErrorKind,
    FoodtraxResult, StoreResult,
};
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

/// Reply sent whenever a command fails for any reason.
pub const APOLOGY: &str = "Sorry, I don't know how to help you.";

/// Reply when the store holds no trucks or no locations.
pub const NO_TRUCKS: &str = "There are no trucks being tracked right now.";

/// Reply to `checkin`.
pub const CHECKIN_UNSUPPORTED: &str = "Functionality not supported yet.";

/// Answers chat commands from the FoodTrax database.
///
/// Holds no per-request state; one dispatcher serves every request.
///
/// # Example
///
/// ```rust,ignore
/// use foodtrax_bot::{AppContext, CommandDispatcher};
///
/// let dispatcher = CommandDispatcher::new(AppContext::new(store, slack));
/// let reply = dispatcher.dispatch(&request).await;
/// ```
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    context: AppContext,
    proximity: ProximityEngine,
}

impl CommandDispatcher {
    /// Create a dispatcher measuring distances from metro.
    pub fn new(context: AppContext) -> Self {
        Self::with_reference(context, METRO)
    }

    /// Create a dispatcher measuring distances from `reference`.
    pub fn with_reference(context: AppContext, reference: Coordinate) -> Self {
        Self {
            context,
            proximity: ProximityEngine::new(reference),
        }
    }

    /// Shared application state.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Answer a webhook, never failing.
    ///
    /// Any error raised while composing or delivering the reply is logged
    /// and replaced by [`APOLOGY`].
    #[instrument(skip(self, request), fields(channel = %request.channel_id(), text = %request.text()))]
    pub async fn dispatch(&self, request: &WebhookRequest) -> String {
        match self.handle(request).await {
            Ok(reply) => reply,
            Err(e) => {
                log_failure(&e);
                APOLOGY.to_string()
            }
        }
    }

    /// Answer decoded form fields, never failing.
    ///
    /// A form missing a required field gets [`APOLOGY`].
    pub async fn dispatch_form(&self, form: &HashMap<String, String>) -> String {
        match WebhookRequest::from_form(form) {
            Ok(request) => self.dispatch(&request).await,
            Err(e) => {
                log_failure(&FoodtraxError::from(e));
                APOLOGY.to_string()
            }
        }
    }

    /// Compose the reply to a webhook and deliver it.
    ///
    /// Returns the reply text once delivery succeeded.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A table fetch fails or a row is malformed
    /// - A location refers to an unknown truck (`DataIntegrity`)
    /// - The recipient of a direct message cannot be resolved
    /// - Slack cannot be reached or rejects the message (`DeliveryFailed`)
    pub async fn handle(&self, request: &WebhookRequest) -> FoodtraxResult<String> {
        let command = Command::parse(request.text());
        debug!(command = %command, "Parsed command");

        let reply = self.reply(&command).await?;
        self.deliver(request, &reply).await?;
        Ok(reply)
    }

    /// Compose the reply to a command without delivering it.
    ///
    /// # Errors
    ///
    /// Returns error if reading the store or joining its tables fails.
    #[instrument(skip(self), fields(command = %command))]
    pub async fn reply(&self, command: &Command) -> FoodtraxResult<String> {
        match command {
            Command::Help => Ok(USAGE.to_string()),
            Command::ListAll => self.list_all().await,
            Command::Nearby => self.nearby().await,
            Command::Checkin(target) => {
                debug!(checkin_target = %target, "Checkin requested");
                Ok(CHECKIN_UNSUPPORTED.to_string())
            }
        }
    }

    async fn trucks(&self) -> FoodtraxResult<Vec<TruckRecord>> {
        let rows = self.context.store().fetch_table(TruckRecord::TABLE).await?;
        Ok(parse_rows(&rows, TruckRecord::from_row)?)
    }

    async fn locations(&self) -> FoodtraxResult<Vec<TruckLocationRecord>> {
        let rows = self
            .context
            .store()
            .fetch_table(TruckLocationRecord::TABLE)
            .await?;
        Ok(parse_rows(&rows, TruckLocationRecord::from_row)?)
    }

    async fn list_all(&self) -> FoodtraxResult<String> {
        let trucks = self.trucks().await?;
        if trucks.is_empty() {
            return Ok(NO_TRUCKS.to_string());
        }

        let names = trucks
            .iter()
            .map(|truck| truck.name().as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("Trucks being tracked: {}", names))
    }

    async fn nearby(&self) -> FoodtraxResult<String> {
        let trucks = self.trucks().await?;
        let locations = self.locations().await?;
        if locations.is_empty() {
            return Ok(NO_TRUCKS.to_string());
        }

        let names = trucks
            .iter()
            .map(|truck| (truck.truck_id().as_str(), truck.name().as_str()))
            .collect::<HashMap<_, _>>();

        // One line per location, in the order the store returned them
        let joined = locations
            .iter()
            .map(|location| {
                names
                    .get(location.truck_id().as_str())
                    .map(|name| (*name, *location.location()))
                    .ok_or_else(|| {
                        DispatchError::new(DispatchErrorKind::DataIntegrity {
                            truck_id: location.truck_id().clone(),
                        })
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self
            .proximity
            .rank(joined)
            .into_iter()
            .map(|ranked| {
                let (name, distance) = ranked.into_parts();
                format!("Truck \"{}\" is {:.2} km from metro.", name, distance)
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    #[instrument(skip(self, request, text), fields(direct = request.is_direct_message()))]
    async fn deliver(&self, request: &WebhookRequest, text: &str) -> FoodtraxResult<()> {
        let messenger = self.context.messenger();
        let (target, sent) = if request.is_direct_message() {
            let user_id = self
                .context
                .directory()
                .resolve_id(request.user_id())
                .await?;
            let sent = messenger.send_direct_message(&user_id, text).await?;
            (user_id, sent)
        } else {
            let sent = messenger
                .send_channel_message(request.channel_id(), text)
                .await?;
            (request.channel_id().clone(), sent)
        };

        if !sent {
            return Err(DispatchError::new(DispatchErrorKind::DeliveryFailed { target }).into());
        }
        info!(recipient = %target, "Reply delivered");
        Ok(())
    }
}

fn parse_rows<T>(rows: &[Row], parse: impl Fn(&Row) -> StoreResult<T>) -> StoreResult<Vec<T>> {
    rows.iter().map(parse).collect()
}

/// Record a dispatch failure for operators.
fn log_failure(err: &FoodtraxError) {
    match err.kind() {
        FoodtraxErrorKind::Store(e) => {
            error!(error = %e, "Record store failed while handling command");
        }
        FoodtraxErrorKind::Directory(e) => match &e.kind {
            DirectoryErrorKind::UserNotFound(name) => {
                warn!(user = %name, error = %e, "Reply recipient not in directory");
            }
            DirectoryErrorKind::Unavailable(_) => {
                error!(error = %e, "Directory unavailable while handling command");
            }
        },
        FoodtraxErrorKind::Slack(e) => {
            error!(error = %e, "Slack call failed while handling command");
        }
        FoodtraxErrorKind::Dispatch(e) => match &e.kind {
            DispatchErrorKind::MissingField(field) => {
                warn!(field = %field, "Malformed webhook request");
            }
            DispatchErrorKind::DataIntegrity { truck_id } => {
                error!(truck_id = %truck_id, error = %e, "Location without matching truck");
            }
            DispatchErrorKind::DeliveryFailed { target } => {
                error!(recipient = %target, error = %e, "Slack did not accept the reply");
            }
        },
        FoodtraxErrorKind::Config(e) => {
            error!(error = %e, "Configuration error while handling command");
        }
    }
}
