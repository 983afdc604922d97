//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::strategy::BitPlane;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于位平面 (LSB / MSB) 隐写术的命令行工具，用于在无损格式图像 (如 BMP, PNG) 中隐藏或恢复文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于位平面 (LSB / MSB) 隐写术的命令行工具，用于在无损格式图像 (如 BMP, PNG) 中隐藏或恢复文本，\n并可将图像按通道拆分为黑白位平面以便观察。"
)]
pub struct Cli {
    /// 输出更详细的日志 (-v 为 info，-vv 为 debug)。
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 planes (拆分位平面)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 将图像的 R、G、B 通道拆分为三幅黑白位平面图像。
    Planes(PlanesArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 BMP, PNG)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。每个字符的码点必须不大于 255。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 结果图像的输出路径。默认为输入图像旁的 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 承载数据的位平面。
    #[arg(short, long, value_enum, default_value_t = BitPlane::Lsb)]
    pub plane: BitPlane,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本的输出路径。默认为图像旁的 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 隐藏数据时使用的位平面。
    #[arg(short, long, value_enum, default_value_t = BitPlane::Lsb)]
    pub plane: BitPlane,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'planes' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PlanesArgs {
    /// 要拆分的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 平面图像的输出目录。默认为输入图像所在目录。
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// 要可视化的位平面。
    #[arg(short, long, value_enum, default_value_t = BitPlane::Lsb)]
    pub plane: BitPlane,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}
