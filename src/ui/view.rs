//! Visual tree
//!
//! [`build`] maps a [`ViewState`] to the tree of things on screen. It is pure:
//! the same state always yields an equal tree, however often it is called.
//! Drawing the tree is the job of the terminal and text renderers.

use crate::store::ViewState;
use crate::ui::chart::{ChartSpec, PERFORMANCE_CHART_OPTIONS};
use crate::ui::dashboard::utils::{format_number, format_percent};

pub const LOADING_CAPTION: &str = "Loading AI-Powered Finance Management System...";
pub const ERROR_TITLE: &str = "Error Loading Application";

pub const APP_TITLE: &str = "AI-Powered Finance Management System";
pub const APP_SUBTITLE: &str = "The app provides an AI-powered solution to automate and manage financial transactions, enabling finance teams to build healthier businesses.";
pub const LIVE_BADGE: &str = "Live";

pub const CHART_PANEL_TITLE: &str = "Performance Trends";
pub const FEATURES_PANEL_TITLE: &str = "Feature Overview";

/// Capabilities listed on every ready dashboard, in display order.
pub const FEATURES: [&str; 4] = [
    "AI-powered expense categorization and analysis",
    "Real-time updates on financial transactions",
    "Complex state management for user accounts and transaction data",
    "Data visualization for financial insights",
];

pub const DEMO_TITLE: &str = "Interactive Demo";
pub const DEMO_DESCRIPTION: &str = "This is a demonstration of the AI-Powered Finance Management System application. Built with Rust and ratatui, featuring a responsive terminal layout, real-time data visualization and a dark, high-contrast theme.";
pub const DEMO_BUTTONS: [&str; 2] = ["Try Demo", "View Documentation"];

pub const FOOTER_TEXT: &str = "Built with Rust, ratatui and tokio | [Q] Quit";

/// Highlight colour of a metric card.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Accent {
    Purple,
    Blue,
    Yellow,
    Pink,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoSection {
    pub title: &'static str,
    pub description: &'static str,
    /// Display only; nothing reacts to them.
    pub buttons: [&'static str; 2],
}

/// Contents of the ready screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub header: Header,
    pub cards: [MetricCard; 4],
    pub chart_title: &'static str,
    pub chart: ChartSpec,
    pub features_title: &'static str,
    pub features: [&'static str; 4],
    pub demo: DemoSection,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading { caption: &'static str },
    Error { title: &'static str, message: String },
    Ready(Box<Dashboard>),
}

pub fn build(state: &ViewState) -> View {
    match state {
        ViewState::Loading => View::Loading {
            caption: LOADING_CAPTION,
        },
        ViewState::Error(message) => View::Error {
            title: ERROR_TITLE,
            message: message.clone(),
        },
        ViewState::Ready(data) => {
            let metrics = &data.metrics;
            View::Ready(Box::new(Dashboard {
                header: Header {
                    title: APP_TITLE,
                    subtitle: APP_SUBTITLE,
                    badge: LIVE_BADGE,
                },
                cards: [
                    MetricCard {
                        label: "Total Items",
                        value: format_number(metrics.total),
                        accent: Accent::Purple,
                    },
                    MetricCard {
                        label: "Active Users",
                        value: format_number(metrics.active),
                        accent: Accent::Blue,
                    },
                    MetricCard {
                        label: "Growth Rate",
                        value: format_percent(metrics.growth),
                        accent: Accent::Yellow,
                    },
                    MetricCard {
                        label: "Efficiency",
                        value: format_percent(metrics.efficiency),
                        accent: Accent::Pink,
                    },
                ],
                chart_title: CHART_PANEL_TITLE,
                chart: ChartSpec::new(&data.chart_data, PERFORMANCE_CHART_OPTIONS),
                features_title: FEATURES_PANEL_TITLE,
                features: FEATURES,
                demo: DemoSection {
                    title: DEMO_TITLE,
                    description: DEMO_DESCRIPTION,
                    buttons: DEMO_BUTTONS,
                },
                footer: FOOTER_TEXT,
            }))
        }
    }
}
