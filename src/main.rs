use clap::Parser;
use serde::Serialize;
use stroke_gesture::adapters::read_stroke_file;
use stroke_gesture::utils::{logger, validation::Validate};
use stroke_gesture::{CliConfig, GestureError, Recognition, Rejection, TemplateId, TomlConfig};

/// 辨識結果無對應手勢時的退出碼
const EXIT_NO_MATCH: i32 = 4;

#[derive(Debug, Serialize)]
struct Outcome {
    label: Option<String>,
    id: Option<TemplateId>,
    distance: f64,
    rejection: Option<Rejection>,
}

fn run(config: &CliConfig) -> Result<Outcome, GestureError> {
    let mut gesture_set = TomlConfig::from_file(&config.config)?;
    if let Some(threshold) = config.threshold {
        gesture_set.engine.match_threshold = Some(threshold);
    }
    let (mut engine, labels) = gesture_set.build_engine()?;

    let points = read_stroke_file(&config.stroke)?;
    tracing::info!("✏️ Replaying {} samples", points.len());
    for p in &points {
        engine.ingest(p.x, p.y)?;
    }

    let Recognition {
        id,
        distance,
        rejection,
    } = engine.recognize();
    Ok(Outcome {
        label: id.and_then(|id| labels.get(&id).cloned()),
        id,
        distance,
        rejection,
    })
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(logger::LogFormat::from_flag(config.log_json), config.verbose);

    tracing::info!("Starting stroke-gesture CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let outcome = match run(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Recognition failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = e.severity().exit_code();
            std::process::exit(exit_code);
        }
    };

    match &outcome.label {
        Some(label) => tracing::info!("✅ Recognized '{}' (distance {:.4})", label, outcome.distance),
        None => tracing::warn!("🤷 No gesture matched: {:?}", outcome.rejection),
    }

    if config.json {
        match serde_json::to_string(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                let e = GestureError::from(e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    } else {
        match &outcome.label {
            Some(label) => println!("{}\t{:.6}", label, outcome.distance),
            None => println!(
                "no match ({})",
                outcome
                    .rejection
                    .map(|r| format!("{:?}", r))
                    .unwrap_or_default()
            ),
        }
    }

    if outcome.label.is_none() {
        std::process::exit(EXIT_NO_MATCH);
    }
}
