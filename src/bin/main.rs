use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jakarta_timeutils::config::ConfigLoader;
use jakarta_timeutils::{
    day_index, expiration_till_end_of_day, floor_day, format_with, hour_index, month_range,
    parse_rfc3339, FormatParam,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jakarta-time", about = "UTC+7 (Asia/Jakarta) 時間分桶工具")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 顯示時間點的日序號、小時序號與當日剩餘秒數
    Bucket {
        /// RFC 3339 時間戳，例如 2023-03-28T00:00:00+07:00
        timestamp: String,
    },

    /// 顯示某月份在 UTC+7 中的 Unix 秒範圍
    MonthRange { month: u32, year: i32 },

    /// 以指定時區與格式輸出時間
    Format {
        timestamp: String,

        /// IANA 時區名稱，預設取自配置
        #[arg(short, long)]
        location: Option<String>,

        /// strftime 格式，預設取自配置
        #[arg(short, long)]
        pattern: Option<String>,
    },
}

fn main() -> Result<()> {
    // 初始化日誌系統
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 解析命令行參數
    let cli = Cli::parse();

    match cli.command {
        Commands::Bucket { timestamp } => {
            let t = parse_rfc3339(&timestamp).context("無法解析時間戳")?;
            let midnight = floor_day(&t, 0).context("無法計算當日起點")?;
            debug!("bucket {}", t);

            println!("unix:        {}", t.timestamp());
            println!("day_index:   {}", day_index(&t));
            println!("hour_index:  {}", hour_index(&t));
            println!("day_start:   {}", midnight.to_rfc3339());
            println!("expires_in:  {}", expiration_till_end_of_day(&t));
        }
        Commands::MonthRange { month, year } => {
            let (gte, lte) = month_range(month, year).context("無法計算月份範圍")?;
            println!("{} {}", gte, lte);
        }
        Commands::Format {
            timestamp,
            location,
            pattern,
        } => {
            let config = ConfigLoader::load_current().context("無法載入配置")?;
            let t = parse_rfc3339(&timestamp).context("無法解析時間戳")?;
            let param = FormatParam {
                t: &t,
                location: location.as_deref(),
                format: pattern.as_deref(),
            };
            println!("{}", format_with(&config.format, &param)?);
        }
    }

    Ok(())
}
