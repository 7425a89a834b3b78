use std::time::Duration;

use reqwest::Method;

use crate::{
    config::Config,
    constants::{
        ALREADY_ACCOMPLISHED_MESSAGE, DAILY_KEY_CLAIM_PATH, MISSION_CLAIM_PATH,
        MISSION_LIST_PATH, MISSION_STATUS_EXCLUDED, STATUS_ALREADY_DONE, STATUS_OK,
    },
    error::ApiError,
    http::{ApiClient, RequestParams},
    schemas::{
        ClaimRequest, DailyClaimBody, EmptyBody, Envelope, Header, Mission, MissionListBody,
    },
    utils::Credential,
};

#[derive(Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    /// Server answered 201 with the "already accomplished" message.
    AlreadyAccomplished,
    Rejected { status: i64, message: String },
    Failed,
}

impl ClaimOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Claimed | Self::AlreadyAccomplished)
    }
}

pub fn classify_claim(header: &Header) -> ClaimOutcome {
    match (header.status, header.message()) {
        (STATUS_OK, _) => ClaimOutcome::Claimed,
        (STATUS_ALREADY_DONE, ALREADY_ACCOMPLISHED_MESSAGE) => ClaimOutcome::AlreadyAccomplished,
        (status, message) => ClaimOutcome::Rejected {
            status,
            message: message.to_string(),
        },
    }
}

fn ensure_ok<T>(envelope: Envelope<T>) -> Result<Option<T>, ApiError> {
    if envelope.header.status == STATUS_OK {
        Ok(envelope.body)
    } else {
        Err(ApiError::Application {
            status: envelope.header.status,
            message: envelope.header.message().to_string(),
        })
    }
}

/// Game missions followed by community missions, minus the excluded ones.
pub fn eligible_missions(body: MissionListBody) -> Vec<Mission> {
    body.game_list
        .unwrap_or_default()
        .into_iter()
        .chain(body.community_list.unwrap_or_default())
        .filter(|mission| mission.status != MISSION_STATUS_EXCLUDED)
        .collect()
}

pub struct MissionRunner {
    api: ApiClient,
    account_delay: Duration,
}

impl MissionRunner {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            account_delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ApiClient::new(config.base_url.clone()))
            .with_account_delay(Duration::from_millis(config.account_delay))
    }

    pub fn with_account_delay(mut self, delay: Duration) -> Self {
        self.account_delay = delay;
        self
    }

    pub async fn request_mission_list(&self, token: &str) -> Result<Vec<Mission>, ApiError> {
        let request_params = RequestParams::<EmptyBody> {
            path: MISSION_LIST_PATH,
            method: Method::GET,
            body: None,
        };

        let envelope: Envelope<MissionListBody> = self.api.send(token, &request_params).await?;
        let body = ensure_ok(envelope)?.unwrap_or_default();

        Ok(eligible_missions(body))
    }

    /// Never fails: any error is logged and yields an empty list.
    pub async fn fetch_mission_list(&self, token: &str) -> Vec<Mission> {
        match self.request_mission_list(token).await {
            Ok(missions) => missions,
            Err(e @ ApiError::Application { .. }) => {
                tracing::error!("Failed to fetch mission list: {e}");
                vec![]
            }
            Err(e) => {
                tracing::error!("Error fetching mission list: {e}");
                vec![]
            }
        }
    }

    pub async fn request_claim(&self, token: &str, uid: i64) -> Result<Header, ApiError> {
        let request_params = RequestParams {
            path: MISSION_CLAIM_PATH,
            method: Method::POST,
            body: Some(ClaimRequest { uid }),
        };

        let envelope: Envelope<serde_json::Value> = self.api.send(token, &request_params).await?;

        Ok(envelope.header)
    }

    pub async fn claim_mission(&self, token: &str, mission: &Mission) -> ClaimOutcome {
        tracing::debug!(
            "Claiming mission UID {} (reward {} x{}, link: {})",
            mission.uid,
            mission.reward_id,
            mission.reward_amount,
            mission.link
        );

        let outcome = match self.request_claim(token, mission.uid).await {
            Ok(header) => classify_claim(&header),
            Err(e) => {
                tracing::error!("Mission UID {}: {e}", mission.uid);
                return ClaimOutcome::Failed;
            }
        };

        match &outcome {
            ClaimOutcome::Claimed | ClaimOutcome::AlreadyAccomplished => {
                tracing::info!(
                    "Mission UID {} completed successfully: {}",
                    mission.uid,
                    mission.text
                );
            }
            ClaimOutcome::Rejected { status, message } => {
                let message = if message.is_empty() {
                    "Unknown error"
                } else {
                    message.as_str()
                };
                tracing::error!("Mission UID {}: {message}", mission.uid);
                tracing::debug!("Mission UID {} rejected with status {status}", mission.uid);
            }
            ClaimOutcome::Failed => {}
        }

        outcome
    }

    pub async fn request_daily_key(&self, token: &str) -> Result<DailyClaimBody, ApiError> {
        let request_params = RequestParams {
            path: DAILY_KEY_CLAIM_PATH,
            method: Method::POST,
            body: Some(EmptyBody::default()),
        };

        let envelope: Envelope<DailyClaimBody> = self.api.send(token, &request_params).await?;

        Ok(ensure_ok(envelope)?.unwrap_or_default())
    }

    /// Returns whether the key was claimed. Errors are logged, never returned.
    pub async fn claim_daily_key(&self, token: &str) -> bool {
        match self.request_daily_key(token).await {
            Ok(body) => {
                tracing::info!("Daily key claimed successfully.");
                tracing::debug!("Daily key timeDiff: {:?}", body.time_diff);
                true
            }
            Err(e @ ApiError::Application { .. }) => {
                tracing::error!("Failed to claim daily key: {e}");
                false
            }
            Err(e) => {
                tracing::error!("Error claiming daily key: {e}");
                false
            }
        }
    }

    pub async fn process_account(&self, token: &str, index: usize) {
        tracing::info!("Processing account #{index}");

        let missions = self.fetch_mission_list(token).await;

        // No daily key either when there is nothing to claim.
        if missions.is_empty() {
            tracing::warn!("No missions available for this account.");
            return;
        }

        tracing::info!("Claiming {} missions", missions.len());
        let mut claimed = 0;
        for mission in &missions {
            if self.claim_mission(token, mission).await.is_success() {
                claimed += 1;
            }
        }
        tracing::info!("{claimed}/{} missions claimed", missions.len());

        tracing::info!("Processing daily key claim...");
        self.claim_daily_key(token).await;
    }

    pub async fn run(&self, credentials: &[Credential]) {
        if credentials.is_empty() {
            tracing::error!("No bearer tokens found, nothing to process.");
            return;
        }

        tracing::info!(
            "Processing {} accounts against {}",
            credentials.len(),
            self.api.base_url()
        );

        for (index, credential) in credentials.iter().enumerate() {
            if index > 0 && !self.account_delay.is_zero() {
                tokio::time::sleep(self.account_delay).await;
            }

            self.process_account(&credential.token, index).await;
        }

        tracing::info!("Finished processing {} accounts", credentials.len());
    }
}
