use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize, Debug)]
pub struct Header {
    pub status: i64,
    pub message: Option<String>,
}

impl Header {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Wrapper shared by every backend response.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub header: Header,
    pub body: Option<T>,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub uid: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reward_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reward_amount: i64,
    pub status: i64,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MissionListBody {
    pub game_list: Option<Vec<Mission>>,
    pub community_list: Option<Vec<Mission>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyClaimBody {
    pub time_diff: Option<i64>,
}

#[derive(Serialize, Debug)]
pub struct ClaimRequest {
    pub uid: i64,
}

/// Empty JSON object sent to the daily key endpoint.
#[derive(Serialize, Debug, Default)]
pub struct EmptyBody {}
