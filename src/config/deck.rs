//! Static deck resources: walk bounds and the mock portfolio tables.

pub struct WalkBounds {
    // Candlestick walk
    pub candle_base_min: f64,
    pub candle_base_max: f64,
    pub candle_step: f64,
    pub wick_extra: f64,

    // Sparkline walk
    pub spark_base_min: f64,
    pub spark_base_max: f64,
    pub spark_step: f64,
    pub spark_floor: f64,
    pub spark_ceiling: f64,
    pub spark_points: usize,
}

pub struct AssetSpec {
    pub name: &'static str,
    pub symbol: &'static str,
    pub card_value_usd: f64,
    pub card_change_pct: f64,
}

pub struct HoldingSpec {
    pub name: &'static str,
    pub symbol: &'static str,
    pub amount: f64,
    pub value_usd: f64,
}

pub struct StatSpec {
    pub title: &'static str,
    pub value_usd: f64,
    pub change_pct: f64,
}

pub struct MarketTotals {
    pub balance_usd: f64,
    pub profit_usd: f64,
    pub loss_usd: f64,
}

pub struct DeckConfig {
    pub walk: WalkBounds,
    pub assets: &'static [AssetSpec],
    pub holdings: &'static [HoldingSpec],
    pub stats: &'static [StatSpec],
    pub totals: MarketTotals,
}

pub const DECK: DeckConfig = DeckConfig {
    walk: WalkBounds {
        candle_base_min: 5000.0, // Walks start around 5000-7000
        candle_base_max: 7000.0,
        candle_step: 200.0,
        wick_extra: 100.0,

        spark_base_min: 50.0,
        spark_base_max: 100.0,
        spark_step: 20.0,
        spark_floor: 10.0, // Keep sparklines within a reasonable range
        spark_ceiling: 150.0,
        spark_points: 10,
    },

    assets: &[
        AssetSpec {
            name: "Bitcoin",
            symbol: "BTC",
            card_value_usd: 1_523_647.0,
            card_change_pct: 13.11,
        },
        AssetSpec {
            name: "Litecoin",
            symbol: "LTC",
            card_value_usd: 2_145_687.0,
            card_change_pct: 15.08,
        },
        AssetSpec {
            name: "Ethereum",
            symbol: "ETH",
            card_value_usd: 3_312_870.0,
            card_change_pct: 8.57,
        },
        AssetSpec {
            name: "Binance",
            symbol: "BNB",
            card_value_usd: 1_820_045.0,
            card_change_pct: -9.21,
        },
        AssetSpec {
            name: "Dash",
            symbol: "DASH",
            card_value_usd: 9_458_153.0,
            card_change_pct: 12.07,
        },
    ],

    holdings: &[
        HoldingSpec {
            name: "Bitcoin",
            symbol: "BTC",
            amount: 0.00584875,
            value_usd: 19_405.12,
        },
        HoldingSpec {
            name: "Ethereum",
            symbol: "ETH",
            amount: 2.25842108,
            value_usd: 40_552.18,
        },
        HoldingSpec {
            name: "Litecoin",
            symbol: "LTC",
            amount: 10.58963217,
            value_usd: 15_824.58,
        },
        HoldingSpec {
            name: "Dash",
            symbol: "DASH",
            amount: 204.28565885,
            value_usd: 30_635.84,
        },
    ],

    stats: &[
        StatSpec {
            title: "TOTAL INVESTED",
            value_usd: 2_390.68,
            change_pct: 6.24,
        },
        StatSpec {
            title: "TOTAL CHANGE",
            value_usd: 19_523.25,
            change_pct: 3.67,
        },
        StatSpec {
            title: "DAY CHANGE",
            value_usd: 14_799.44,
            change_pct: -4.80,
        },
    ],

    totals: MarketTotals {
        balance_usd: 72_800.0,
        profit_usd: 49_700.0,
        loss_usd: -23_100.0,
    },
};
