//! 可观察状态容器 - 基础设施层
//!
//! 持有唯一一份状态，只暴露"读取 / 原子修改 / 订阅"能力

use tokio::sync::watch;

/// 可观察状态容器
///
/// 职责：
/// - 持有状态的唯一写端
/// - 每次修改在同一把锁内完成，订阅者不会读到半更新的状态
/// - 修改闭包返回 `false` 时不通知订阅者
/// - 不认识 Question / Answers
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T> Observable<T> {
    /// 创建新的状态容器
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// 在读锁内访问当前状态
    ///
    /// 闭包内不要再调用同一个容器的修改方法。
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// 原子修改状态
    ///
    /// # 返回
    /// 返回是否通知了订阅者
    pub fn update(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        self.sender.send_if_modified(modify)
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone> Observable<T> {
    /// 获取当前状态的副本
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// 整体替换状态并通知订阅者
    pub fn replace(&self, value: T) -> T {
        self.sender.send_replace(value)
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
