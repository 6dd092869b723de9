pub mod models {
    pub mod general;
    pub mod score;
    pub mod club_score;
}

pub mod helpers {
    pub mod logging;
    pub mod math;
    pub mod general;

    pub mod ranking;
    pub mod club;
    pub mod scoreboard;

    pub mod handelbars {
        pub mod format_score;
        pub mod position;
    }
}
