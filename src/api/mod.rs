pub mod client;
pub mod lol;
pub mod metrics;
pub mod transport;

pub use lol::RiotClient;

pub mod types {
    pub use super::lol::champion_mastery_v4::ChampionMastery;
    pub use super::lol::champion_v3::ChampionInfo;
    pub use super::lol::league_v4::{Division, LeagueItem, LeagueList, MiniSeries, Queue, Tier};
    pub use super::lol::match_v4::{
        Match, MatchFilter, MatchReference, MatchStreamValue, MatchTimeline, Matchlist,
    };
    pub use super::lol::spectator_v4::{FeaturedGames, GameInfo};
    pub use super::lol::status_v3::Status;
    pub use super::lol::summoner_v4::Summoner;
    pub use super::lol::tournament_v4::{
        LobbyEventList, MapType, PickType, ProviderRegistrationParameters, SpectatorType,
        Tournament, TournamentCodeParameters, TournamentRegistrationParameters,
        TournamentUpdateParameters,
    };
}
