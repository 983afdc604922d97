use anyhow::Ok;
use bit_plane_hide::{
    BitPlane,
    cli::{HideArgs, PlanesArgs, RecoverArgs},
    handler::{handle_hide, handle_planes, handle_recover},
};
use image::{ImageBuffer, Rgba};
use rand::RngCore;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// 一个辅助函数，用于创建一个带有随机像素的测试图像
fn create_test_image(path: &Path, width: u32, height: u32) {
    let mut img_buf = ImageBuffer::new(width, height);
    let mut raw_pixels = vec![0u8; (width * height * 4) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);

    img_buf
        .pixels_mut()
        .zip(raw_pixels.chunks_exact(4))
        .for_each(|(pixel, chunk)| {
            *pixel = Rgba([chunk[0], chunk[1], chunk[2], 255]);
        });

    img_buf.save(path).expect("Failed to create test image.");
}

/// 验证从隐藏到恢复的完整流程 (BMP 输出)
#[test]
fn test_handle_hide_and_recover_integration() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let hidden_image_path = dir.path().join("hidden.bmp");
    let source_text_path = dir.path().join("source.txt");
    let recovered_text_path = dir.path().join("recovered.txt");

    create_test_image(&original_image_path, 100, 100);
    let original_text = "This is a test message for the handler! Café au lait, 50°.";
    fs::write(&source_text_path, original_text)?;

    // 2. 测试 handle_hide
    let hide_args = HideArgs {
        image: original_image_path.clone(),
        text: source_text_path.clone(),
        dest: Some(hidden_image_path.clone()),
        plane: BitPlane::Lsb,
        force: false,
    };
    handle_hide(hide_args)?;
    assert!(
        hidden_image_path.exists(),
        "Hidden image should be created."
    );

    // 3. 测试 handle_recover
    let recover_args = RecoverArgs {
        image: hidden_image_path.clone(),
        text: Some(recovered_text_path.clone()),
        plane: BitPlane::Lsb,
        force: false,
    };
    handle_recover(recover_args)?;
    assert!(
        recovered_text_path.exists(),
        "Recovered text file should be created."
    );

    // 4. 验证结果
    let recovered_text = fs::read_to_string(&recovered_text_path)?;
    assert_eq!(
        original_text, recovered_text,
        "Recovered text must match the original."
    );

    Ok(())
}

/// 验证 MSB 位平面的隐藏与恢复，以及用错误的位平面恢复时会失败
#[test]
fn test_handle_hide_and_recover_msb() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.bmp");
    let hidden_image_path = dir.path().join("hidden_msb.png");
    let source_text_path = dir.path().join("source.txt");
    let recovered_text_path = dir.path().join("recovered.txt");

    // 纯黑图像：LSB 与 MSB 平面都没有结束标记
    ImageBuffer::from_pixel(60, 60, Rgba([0u8, 0, 0, 255])).save(&original_image_path)?;
    let original_text = "Kogut Dawid Piotr";
    fs::write(&source_text_path, original_text)?;

    handle_hide(HideArgs {
        image: original_image_path,
        text: source_text_path,
        dest: Some(hidden_image_path.clone()),
        plane: BitPlane::Msb,
        force: false,
    })?;

    let wrong_plane = handle_recover(RecoverArgs {
        image: hidden_image_path.clone(),
        text: Some(recovered_text_path.clone()),
        plane: BitPlane::Lsb,
        force: false,
    });
    assert!(wrong_plane.is_err(), "LSB recovery of an MSB image should fail.");
    assert!(!recovered_text_path.exists());

    handle_recover(RecoverArgs {
        image: hidden_image_path,
        text: Some(recovered_text_path.clone()),
        plane: BitPlane::Msb,
        force: false,
    })?;
    assert_eq!(fs::read_to_string(&recovered_text_path)?, original_text);

    Ok(())
}

/// 验证当用户不提供输出路径时，是否能正确生成默认路径并完成操作
#[test]
fn test_handle_hide_and_recover_with_defaults() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let source_text_path = dir.path().join("source.txt");

    create_test_image(&original_image_path, 100, 100);
    let original_text = "Testing default path generation.";
    fs::write(&source_text_path, original_text)?;

    // 2. 测试 handle_hide，不提供 dest 路径
    let hide_args = HideArgs {
        image: original_image_path.clone(),
        text: source_text_path.clone(),
        dest: None, // 关键：测试 None 的情况
        plane: BitPlane::Lsb,
        force: false,
    };
    handle_hide(hide_args)?;

    // 验证默认的隐藏图像文件是否已创建
    let expected_hidden_path = dir.path().join("doctored_original.png");
    assert!(
        expected_hidden_path.exists(),
        "Default hidden image should be created at: {:?}",
        expected_hidden_path
    );

    // 3. 测试 handle_recover，不提供 text 输出路径
    let recover_args = RecoverArgs {
        image: expected_hidden_path, // 使用上一步生成的默认文件
        text: None,                  // 关键：测试 None 的情况
        plane: BitPlane::Lsb,
        force: false,
    };
    handle_recover(recover_args)?;

    // 验证默认的恢复文本文件是否已创建
    let expected_recovered_path = dir.path().join("recovered_doctored_original.txt");
    assert!(
        expected_recovered_path.exists(),
        "Default recovered text file should be created at: {:?}",
        expected_recovered_path
    );

    // 4. 验证结果
    let recovered_text = fs::read_to_string(&expected_recovered_path)?;
    assert_eq!(
        original_text, recovered_text,
        "Recovered text from default file must match the original."
    );

    Ok(())
}

/// 验证覆盖保护机制以及 `--force` 标志是否按预期工作
#[test]
fn test_overwrite_protection_and_force_flag() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let text_path = dir.path().join("text.txt");
    let dest_path = dir.path().join("dest.png");

    create_test_image(&image_path, 50, 50);
    fs::write(&text_path, "some text")?;

    // 2. 场景一：测试覆盖保护
    // 先创建一个同名的目标文件，模拟“文件已存在”的场景
    fs::write(&dest_path, "this is a dummy file to be overwritten")?;
    assert!(dest_path.exists());

    // 构建参数，不使用 --force
    let hide_args_no_force = HideArgs {
        image: image_path.clone(),
        text: text_path.clone(),
        dest: Some(dest_path.clone()),
        plane: BitPlane::Lsb,
        force: false,
    };

    // 执行并断言操作会失败
    let result = handle_hide(hide_args_no_force);
    assert!(result.is_err(), "Execution should fail without --force when file exists.");
    if let Err(e) = result {
        assert!(e.to_string().contains("Output file already exists"));
    }

    // 3. 场景二：测试强制覆盖
    // 构建参数，这次使用 --force
    let hide_args_with_force = HideArgs {
        image: image_path.clone(),
        text: text_path.clone(),
        dest: Some(dest_path.clone()),
        plane: BitPlane::Lsb,
        force: true,
    };

    // 执行并断言操作会成功
    let result = handle_hide(hide_args_with_force);
    assert!(result.is_ok(), "Execution should succeed with --force when file exists.");

    // 验证文件确实被覆盖（内容不再是 "this is a dummy file..."）
    let dummy_content = fs::read(&dest_path)?;
    assert_ne!(dummy_content, b"this is a dummy file to be overwritten");

    Ok(())
}

/// 验证空间不足时的错误处理
#[test]
fn test_handle_hide_not_enough_space() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("small.png");
    let text_path = dir.path().join("large.txt");
    let dest_path = dir.path().join("dest.png");

    // 创建一个非常小的图片
    create_test_image(&image_path, 10, 10);
    // 创建一个非常大的文本
    let large_text = "a".repeat(5000);
    fs::write(&text_path, large_text)?;

    // 2. 执行并断言错误
    let hide_args = HideArgs {
        image: image_path,
        text: text_path,
        dest: Some(dest_path.clone()),
        plane: BitPlane::Lsb,
        force: false,
    };
    let result = handle_hide(hide_args);

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Not enough space"));
    }
    assert!(!dest_path.exists(), "No output should be written on failure.");

    Ok(())
}

/// 验证有损输出格式会被拒绝
#[test]
fn test_handle_hide_rejects_lossy_output() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let text_path = dir.path().join("text.txt");

    create_test_image(&image_path, 20, 20);
    fs::write(&text_path, "hello")?;

    let result = handle_hide(HideArgs {
        image: image_path,
        text: text_path,
        dest: Some(dir.path().join("dest.jpg")),
        plane: BitPlane::Lsb,
        force: false,
    });

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("not lossless"));
    }

    Ok(())
}

/// 验证位平面拆分会生成三幅黑白图像
#[test]
fn test_handle_planes_writes_three_images() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image_path = dir.path().join("photo.png");
    let out_dir = dir.path().join("planes");
    fs::create_dir(&out_dir)?;

    let mut img_buf = ImageBuffer::new(2, 1);
    img_buf.put_pixel(0, 0, Rgba([3u8, 0, 0, 255]));
    img_buf.put_pixel(1, 0, Rgba([2u8, 0, 0, 255]));
    img_buf.save(&image_path)?;

    handle_planes(PlanesArgs {
        image: image_path.clone(),
        out_dir: Some(out_dir.clone()),
        plane: BitPlane::Lsb,
        force: false,
    })?;

    for suffix in ["r", "g", "b"] {
        let path = out_dir.join(format!("photo_plane_{suffix}.bmp"));
        assert!(path.exists(), "Plane image should be created at: {:?}", path);
    }

    let red = image::open(out_dir.join("photo_plane_r.bmp"))?.to_luma8();
    assert_eq!(red.get_pixel(0, 0).0, [255]);
    assert_eq!(red.get_pixel(1, 0).0, [0]);

    // 再次执行且不使用 --force 应该失败
    let again = handle_planes(PlanesArgs {
        image: image_path,
        out_dir: Some(out_dir),
        plane: BitPlane::Lsb,
        force: false,
    });
    assert!(again.is_err());

    Ok(())
}
