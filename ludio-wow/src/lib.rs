//! ludio-wow
//!
//! Public connector that implements `LudioConnector` on top of the
//! Battle.net World of Warcraft profile API. Exposes guild roster
//! enumeration, basic member profiles, and the full character profile
//! composite, authenticated through the client-credentials grant with an
//! explicit refresh-grant variant.
#![warn(missing_docs)]

mod builder;
pub mod slug;
mod wire;

pub use builder::WowBuilder;
pub use slug::slugify;

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use ludio_core::auth::AccessToken;
use ludio_core::connector::{
    CharacterProfileProvider, GuildRosterProvider, LudioConnector, ProviderKey,
};
use ludio_core::http::send_json;
use ludio_core::records::{
    CharacterProfile, CharacterStatistics, EquippedItem, GuildMember, GuildMemberProfile,
};
use ludio_core::{ErrorKind, LudioError, RosterOptions, TokenCache, WowCredentials};

use crate::wire::{
    AchievementsWire, EquipmentWire, ProfileWire, RosterEnvelope, StatisticsWire, TokenResponse,
};

const PROVIDER: &str = "ludio-wow";

/// Region used when an operation has no per-call region, e.g. the
/// pre-batch credential check.
const DEFAULT_REGION: &str = "us";

/// Outcome of an explicit refresh-token grant.
#[derive(Debug, Clone)]
pub struct RefreshGrant {
    /// The newly issued bearer secret.
    pub access_token: String,
    /// Replacement refresh token, when the authorization server rotates it.
    pub refresh_token: Option<String>,
    /// Reported lifetime of the access token, in seconds.
    pub expires_in: Option<u64>,
}

/// Public connector type. Construct through [`WowBuilder`].
pub struct WowConnector {
    pub(crate) creds: WowCredentials,
    pub(crate) http: reqwest::Client,
    pub(crate) api_base: Option<Url>,
    pub(crate) auth_base: Option<Url>,
    pub(crate) tokens: TokenCache,
}

impl WowConnector {
    /// Static provider key for orchestrator priority configuration.
    pub const KEY: ProviderKey = ProviderKey::new(PROVIDER);

    fn auth_url(&self, region: &str) -> Result<Url, LudioError> {
        let base = match &self.auth_base {
            Some(base) => base.clone(),
            None => Url::parse(&format!("https://{region}.battle.net/"))
                .map_err(|e| LudioError::config(format!("battle.net auth base: {e}")))?,
        };
        base.join("oauth/token")
            .map_err(|e| LudioError::config(format!("battle.net auth url: {e}")))
    }

    fn api_url(&self, region: &str, path: &str) -> Result<Url, LudioError> {
        let base = match &self.api_base {
            Some(base) => base.clone(),
            None => Url::parse(&format!("https://{region}.api.blizzard.com/"))
                .map_err(|e| LudioError::config(format!("battle.net api base: {e}")))?,
        };
        base.join(path)
            .map_err(|e| LudioError::config(format!("battle.net api url: {e}")))
    }

    async fn fetch_token(&self, region: &str) -> Result<AccessToken, LudioError> {
        let req = self
            .http
            .post(self.auth_url(region)?)
            .basic_auth(&self.creds.client_id, Some(&self.creds.client_secret))
            .form(&[("grant_type", "client_credentials")]);
        let body: TokenResponse = send_json(PROVIDER, "access token", req).await?;
        Ok(AccessToken::new(
            body.access_token,
            body.expires_in.map(Duration::from_secs),
        ))
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// This grant is never invoked implicitly; callers decide when a
    /// long-lived session should roll its credentials. The returned
    /// replacement refresh token, when present, supersedes the one passed
    /// in.
    ///
    /// # Errors
    /// `Auth` when the authorization server rejects the refresh token.
    pub async fn refresh(
        &self,
        refresh_token: &str,
        region: &str,
    ) -> Result<RefreshGrant, LudioError> {
        let req = self
            .http
            .post(self.auth_url(region)?)
            .basic_auth(&self.creds.client_id, Some(&self.creds.client_secret))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ]);
        let body: TokenResponse = send_json(PROVIDER, "refreshed token", req).await?;
        Ok(RefreshGrant {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in,
        })
    }

    /// Authorized profile-namespace GET.
    async fn get<T: DeserializeOwned>(
        &self,
        region: &str,
        path: &str,
        what: &str,
    ) -> Result<T, LudioError> {
        let token = self.tokens.bearer(|| self.fetch_token(region)).await?;
        let req = self
            .http
            .get(self.api_url(region, path)?)
            .bearer_auth(&token)
            .query(&[
                ("namespace", format!("profile-{region}")),
                ("locale", "en_US".to_string()),
            ]);
        let res = send_json(PROVIDER, what, req).await;
        if let Err(e) = &res {
            if e.kind() == ErrorKind::Auth {
                self.tokens.invalidate().await;
            }
        }
        res
    }

    fn character_path(realm: &str, name: &str) -> String {
        format!(
            "profile/wow/character/{}/{}",
            realm.to_lowercase(),
            name.to_lowercase()
        )
    }
}

#[async_trait]
impl GuildRosterProvider for WowConnector {
    async fn guild_members(
        &self,
        realm: &str,
        guild: &str,
        opts: &RosterOptions,
    ) -> Result<Vec<GuildMember>, LudioError> {
        let guild_slug = slugify(guild);
        let path = format!(
            "data/wow/guild/{}/{}/roster",
            realm.to_lowercase(),
            guild_slug
        );
        let env: RosterEnvelope = self
            .get(&opts.region, &path, &format!("guild {guild_slug}"))
            .await?;
        Ok(env
            .members
            .into_iter()
            .filter_map(|m| {
                m.character.map(|c| GuildMember {
                    name: c.name,
                    level: c.level,
                    rank: m.rank,
                })
            })
            .collect())
    }

    async fn member_profile(
        &self,
        realm: &str,
        name: &str,
        opts: &RosterOptions,
    ) -> Result<Option<GuildMemberProfile>, LudioError> {
        let path = Self::character_path(realm, name);
        let res: Result<ProfileWire, LudioError> = self
            .get(&opts.region, &path, &format!("character {name}"))
            .await;
        match res {
            Ok(p) => Ok(Some(GuildMemberProfile {
                name: p.name,
                level: p.level,
            })),
            // Deleted or transferred characters stay on rosters for a
            // while; a missing profile is data, not a failure.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl CharacterProfileProvider for WowConnector {
    async fn character_profile(
        &self,
        realm: &str,
        name: &str,
        region: &str,
    ) -> Result<CharacterProfile, LudioError> {
        let base_path = Self::character_path(realm, name);
        let primary: ProfileWire = self
            .get(region, &base_path, &format!("character {name}"))
            .await?;
        let mut profile = CharacterProfile {
            name: primary.name,
            level: primary.level,
            character_class: primary.character_class.name,
            race: primary.race.name,
            faction: primary.faction.name,
            realm: primary.realm.slug,
            ..CharacterProfile::default()
        };

        // Sub-fetches are best-effort; the profile stands without them.
        match self
            .get::<AchievementsWire>(
                region,
                &format!("{base_path}/achievements"),
                &format!("achievements of {name}"),
            )
            .await
        {
            Ok(a) => profile.achievement_points = a.total_points,
            Err(e) => tracing::warn!(character = %name, error = %e, "achievements fetch failed"),
        }
        match self
            .get::<StatisticsWire>(
                region,
                &format!("{base_path}/statistics"),
                &format!("statistics of {name}"),
            )
            .await
        {
            Ok(s) => {
                profile.statistics = Some(CharacterStatistics {
                    health: s.health,
                    power: s.power,
                    power_type: s.power_type.name,
                });
            }
            Err(e) => tracing::warn!(character = %name, error = %e, "statistics fetch failed"),
        }
        match self
            .get::<EquipmentWire>(
                region,
                &format!("{base_path}/equipment"),
                &format!("equipment of {name}"),
            )
            .await
        {
            Ok(eq) => {
                profile.equipment = eq
                    .equipped_items
                    .into_iter()
                    .map(|i| EquippedItem {
                        slot: i.slot.name,
                        name: i.name,
                        item_level: i.level.map(|l| l.value),
                    })
                    .collect();
            }
            Err(e) => tracing::warn!(character = %name, error = %e, "equipment fetch failed"),
        }
        Ok(profile)
    }
}

#[async_trait]
impl LudioConnector for WowConnector {
    fn name(&self) -> &'static str {
        PROVIDER
    }
    fn vendor(&self) -> &'static str {
        "Battle.net"
    }

    async fn ensure_ready(&self) -> Result<(), LudioError> {
        self.tokens
            .bearer(|| self.fetch_token(DEFAULT_REGION))
            .await
            .map(|_| ())
    }

    fn as_guild_roster_provider(&self) -> Option<&dyn GuildRosterProvider> {
        Some(self as &dyn GuildRosterProvider)
    }
    fn as_character_profile_provider(&self) -> Option<&dyn CharacterProfileProvider> {
        Some(self as &dyn CharacterProfileProvider)
    }
}
