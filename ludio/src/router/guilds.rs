use ludio_core::{Capability, CharacterProfile, LudioError, RosterOptions, RosterReport};

use crate::Ludio;

impl Ludio {
    /// Enumerate guild members across one or more guilds and collect the
    /// profiles inside the `[offset, offset + limit)` window.
    ///
    /// Behavior and trade-offs:
    /// - Guilds are walked in input order with one shared member counter,
    ///   so the window spans guild boundaries; `total` reports every member
    ///   walked, letting callers page with `offset`.
    /// - Best-effort throughout: a guild that cannot be fetched and a
    ///   member whose profile fails or no longer exists are logged and
    ///   skipped, never failing the enumeration. The report can therefore
    ///   hold fewer than `limit` profiles even when the window was full.
    ///
    /// # Errors
    /// Returns an error when no provider serves guild rosters, when the
    /// up-front credential check fails fatally, or when a member fetch
    /// hits a fatal (`Auth`/`Config`) error.
    pub async fn guild_rosters(
        &self,
        guild_names: &[&str],
        opts: &RosterOptions,
    ) -> Result<RosterReport, LudioError> {
        self.ensure_ready_where(
            |c| c.as_guild_roster_provider().is_some(),
            Capability::GuildRoster,
        )
        .await?;

        let mut count: usize = 0;
        let mut results = Vec::new();
        let window_end = opts.offset.saturating_add(opts.limit);

        for &guild in guild_names {
            let members = match self
                .fetch_single(Capability::GuildRoster, format!("guild '{guild}'"), |c| {
                    c.as_guild_roster_provider()?;
                    let guild = guild.to_owned();
                    let opts = opts.clone();
                    Some(async move {
                        match c.as_guild_roster_provider() {
                            Some(p) => p.guild_members(&opts.realm, &guild, &opts).await,
                            None => Err(LudioError::unsupported(Capability::GuildRoster.as_str())),
                        }
                    })
                })
                .await
            {
                Ok(members) => members,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(guild, error = %e, "guild fetch failed; skipping");
                    continue;
                }
            };

            for member in members {
                let idx = count;
                count += 1;
                if idx < opts.offset || idx >= window_end {
                    continue;
                }
                let label = format!("character '{}'", member.name);
                match self
                    .fetch_single(Capability::GuildRoster, label, |c| {
                        c.as_guild_roster_provider()?;
                        let name = member.name.clone();
                        let opts = opts.clone();
                        Some(async move {
                            match c.as_guild_roster_provider() {
                                Some(p) => p.member_profile(&opts.realm, &name, &opts).await,
                                None => {
                                    Err(LudioError::unsupported(Capability::GuildRoster.as_str()))
                                }
                            }
                        })
                    })
                    .await
                {
                    Ok(Some(profile)) => results.push(profile),
                    Ok(None) => {
                        tracing::warn!(character = %member.name, "character gone upstream; skipping");
                    }
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        tracing::warn!(character = %member.name, error = %e, "profile fetch failed; skipping");
                    }
                }
            }
        }

        Ok(RosterReport {
            total: count,
            offset: opts.offset,
            limit: opts.limit,
            results,
        })
    }

    /// Fetch one character's full profile composite.
    ///
    /// The primary profile lookup decides success; statistics, equipment,
    /// and achievement points are enrichment downgraded to defaults by the
    /// provider when their sub-fetches fail.
    ///
    /// # Errors
    /// Returns `NotFound` when the character does not exist, or an error
    /// when no eligible provider succeeds or none support the capability.
    pub async fn character_profile(
        &self,
        realm: &str,
        name: &str,
        region: &str,
    ) -> Result<CharacterProfile, LudioError> {
        self.fetch_single(
            Capability::CharacterProfile,
            format!("character '{name}' on {realm}"),
            |c| {
                c.as_character_profile_provider()?;
                let realm = realm.to_owned();
                let name = name.to_owned();
                let region = region.to_owned();
                Some(async move {
                    match c.as_character_profile_provider() {
                        Some(p) => p.character_profile(&realm, &name, &region).await,
                        None => Err(LudioError::unsupported(Capability::CharacterProfile.as_str())),
                    }
                })
            },
        )
        .await
    }
}
