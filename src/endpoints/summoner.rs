use crate::client::LcuClient;
use crate::error::LcuError;
use crate::models::summoner::CurrentSummoner;

pub const CURRENT_SUMMONER_PATH: &str = "/lol-summoner/v1/current-summoner";

impl LcuClient {
    /// Get the summoner logged into the running client
    pub async fn current_summoner(&self) -> Result<CurrentSummoner, LcuError> {
        self.get_json(CURRENT_SUMMONER_PATH).await
    }
}
