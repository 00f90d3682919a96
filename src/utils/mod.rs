pub mod aggregator; // 航班统计：早班数、瑞典占比、热门目的地、币种、平均行程时长
pub mod common; // 公共的函数，不好分类，可以迁移到其它项目的可能性高
pub mod error; // 错误类型
pub mod files; // 与文件相关，读取本地数据集、写CSV
pub mod logger; // 日志初始化
pub mod models; // 航班数据结构和统计结果
pub mod network; // 数据源：URL或本地文件
pub mod report; // 把统计结果输出成文本、JSON、CSV
