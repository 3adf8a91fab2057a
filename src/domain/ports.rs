use crate::utils::error::LoadError;

/// 唯讀的資料來源；儲存庫只在建構時讀取一次
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, LoadError>;

    /// 錯誤訊息中使用的完整位置
    fn locate(&self, path: &str) -> String {
        path.to_string()
    }
}

pub trait ConfigProvider {
    fn data_path(&self) -> &str;
    fn base_dir(&self) -> &str;
}
