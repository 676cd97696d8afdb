pub mod summoner;
