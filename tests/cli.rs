use clap::Parser;
use freqpicker::cli::*;
use freqpicker::data::selection::{Point, ThirdClickPolicy};
use freqpicker::{ColorScheme, FrequencyScale};

#[test]
fn parses_point_pairs() {
    assert_eq!(parse_point("700,100"), Ok(Point::new(700, 100)));
    assert_eq!(parse_point(" -5 , 3"), Ok(Point::new(-5, 3)));
    assert!(parse_point("700").is_err());
    assert!(parse_point("a,1").is_err());
}

#[test]
fn calc_subcommand_reproduces_worked_example() {
    let args = Args::try_parse_from([
        "freqpicker",
        "calc",
        "--width",
        "1900",
        "--sample-rate",
        "1500000",
        "--p1",
        "700,100",
        "--p2",
        "1100,400",
    ])
    .unwrap();
    let Some(Command::Calc(calc)) = args.command else {
        panic!("expected calc subcommand");
    };
    let r = calc.compute().unwrap();
    assert_eq!(r.frequency_offset_hz, -39474);
    assert_eq!(r.cutoff_frequency_hz, 157895);
    assert_eq!(r.decimation_rate, 9);
    assert_eq!(r.output_sample_rate_hz, 166667);

    let text = calc.run().unwrap();
    assert!(text.contains("-39474 Hz"), "Got: {}", text);
    assert!(text.contains("12.72 MB"), "Got: {}", text);
}

#[test]
fn calc_json_output_is_machine_readable() {
    let args = Args::try_parse_from([
        "freqpicker",
        "calc",
        "--width=1900",
        "--sample-rate=1500000",
        "--p1=1100,400",
        "--p2=700,100",
        "--format=json",
    ])
    .unwrap();
    let Some(Command::Calc(calc)) = args.command else {
        panic!("expected calc subcommand");
    };
    let out = calc.run().unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["decimation_rate"], 9);
    assert_eq!(v["cutoff_frequency_hz"], 157895);
}

#[test]
fn calc_reports_zero_width_selection() {
    let args = Args::try_parse_from([
        "freqpicker",
        "calc",
        "--width=1900",
        "--sample-rate=1500000",
        "--p1=700,100",
        "--p2=700,400",
    ])
    .unwrap();
    let Some(Command::Calc(calc)) = args.command else {
        panic!("expected calc subcommand");
    };
    let err = calc.run().unwrap_err();
    assert!(err.to_string().contains("zero width"), "Got: {}", err);
}

#[test]
fn gui_arguments_build_config() {
    let args = Args::try_parse_from([
        "freqpicker",
        "capture.png",
        "--sample-rate",
        "2400000",
        "--third-click",
        "discard",
        "--scale",
        "half-nyquist",
        "--capture-seconds",
        "5",
        "--theme",
        "light",
        "--reset-key",
        "Ctrl+R",
    ])
    .unwrap();
    assert!(args.command.is_none());
    let cfg = args.into_config();
    assert_eq!(cfg.image.as_deref(), Some(std::path::Path::new("capture.png")));
    assert_eq!(cfg.sample_rate, Some(2_400_000));
    assert_eq!(cfg.third_click, ThirdClickPolicy::Discard);
    assert_eq!(cfg.calculator.frequency_scale, FrequencyScale::HalfNyquist);
    assert_eq!(cfg.calculator.capture_seconds, 5.0);
    assert_eq!(cfg.calculator.bytes_per_sample, 4);
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
    assert_eq!(cfg.hotkeys.reset.map(|h| h.to_string()), Some("Ctrl+R".to_string()));
}

#[test]
fn defaults_without_arguments() {
    let cfg = Args::try_parse_from(["freqpicker"]).unwrap().into_config();
    assert!(cfg.image.is_none());
    assert_eq!(cfg.third_click, ThirdClickPolicy::Restart);
    assert_eq!(cfg.calculator.frequency_scale, FrequencyScale::Nyquist);
    assert_eq!(cfg.color_scheme, ColorScheme::Dark);
}

#[test]
fn enum_flags_use_core_value_names() {
    let args = Args::try_parse_from([
        "freqpicker",
        "--theme",
        "high-contrast",
        "--third-click",
        "restart",
        "--scale",
        "nyquist",
    ])
    .unwrap();
    assert_eq!(args.theme, ColorScheme::HighContrast);
    assert_eq!(args.third_click, ThirdClickPolicy::Restart);
    assert_eq!(args.settings.scale, FrequencyScale::Nyquist);

    assert!(Args::try_parse_from(["freqpicker", "--theme", "sepia"]).is_err());
    assert!(Args::try_parse_from(["freqpicker", "--scale", "quarter"]).is_err());
}
