//! Compiled-in project templates and placeholder substitution.
//!
//! Each template carries one placeholder token. Human-facing files are
//! rendered with the bare project name; generated Go code that imports the
//! project is rendered with the canonical identifier.

use crate::paths;
use crate::plan::ScaffoldPlan;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// The single token replaced in every template body.
pub const PLACEHOLDER: &str = "{{.Appname}}";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which value replaces the placeholder when a template is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Substitution {
    ProjectName,
    CanonicalId,
    /// Body is written as-is.
    Verbatim,
}

impl Substitution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Substitution::ProjectName => "project_name",
            Substitution::CanonicalId => "canonical_id",
            Substitution::Verbatim => "verbatim",
        }
    }

    fn value<'a>(&self, plan: &'a ScaffoldPlan) -> Option<&'a str> {
        match self {
            Substitution::ProjectName => Some(&plan.project_name),
            Substitution::CanonicalId => Some(&plan.canonical_id),
            Substitution::Verbatim => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateSpec {
    pub name: &'static str,
    /// Slash-separated path relative to the project directory.
    pub destination: &'static str,
    #[serde(skip)]
    pub body: &'static str,
    pub placeholder: &'static str,
    pub substitution: Substitution,
    pub executable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub destination: PathBuf,
    pub content: String,
    pub executable: bool,
}

/// Templates in the order they are written to disk.
pub static TEMPLATES: [TemplateSpec; 7] = [
    TemplateSpec {
        name: "config",
        destination: paths::APP_CONF,
        body: APP_CONF_TEMPLATE,
        placeholder: PLACEHOLDER,
        substitution: Substitution::ProjectName,
        executable: false,
    },
    TemplateSpec {
        name: "models",
        destination: paths::TABLES_GO,
        body: MODELS_TEMPLATE,
        placeholder: PLACEHOLDER,
        substitution: Substitution::Verbatim,
        executable: false,
    },
    TemplateSpec {
        name: "msgs",
        destination: paths::MSGLOGIN_GO,
        body: MSGS_TEMPLATE,
        placeholder: PLACEHOLDER,
        substitution: Substitution::CanonicalId,
        executable: false,
    },
    TemplateSpec {
        name: "main",
        destination: paths::MAIN_GO,
        body: MAIN_GO_TEMPLATE,
        placeholder: PLACEHOLDER,
        substitution: Substitution::CanonicalId,
        executable: false,
    },
    TemplateSpec {
        name: "fmt",
        destination: paths::FMT_SH,
        body: FMT_SH_TEMPLATE,
        placeholder: PLACEHOLDER,
        substitution: Substitution::Verbatim,
        executable: true,
    },
    TemplateSpec {
        name: "build",
        destination: paths::BUILD_SH,
        body: BUILD_SH_TEMPLATE,
        placeholder: PLACEHOLDER,
        substitution: Substitution::ProjectName,
        executable: true,
    },
    TemplateSpec {
        name: "readme",
        destination: paths::README_MD,
        body: README_TEMPLATE,
        placeholder: PLACEHOLDER,
        substitution: Substitution::ProjectName,
        executable: false,
    },
];

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Replace every occurrence of the placeholder in `spec.body` with `value`.
pub fn render(spec: &TemplateSpec, value: &str) -> String {
    spec.body.replace(spec.placeholder, value)
}

/// Render one template against a plan.
pub fn render_for(spec: &TemplateSpec, plan: &ScaffoldPlan) -> RenderedFile {
    let content = match spec.substitution.value(plan) {
        Some(value) => render(spec, value),
        None => spec.body.to_string(),
    };
    debug!(template = spec.name, bytes = content.len(), "rendered template");
    RenderedFile {
        destination: paths::layout_path(&plan.target_dir, spec.destination),
        content,
        executable: spec.executable,
    }
}

/// Render the full template set, in write order.
pub fn render_all(plan: &ScaffoldPlan) -> Vec<RenderedFile> {
    TEMPLATES.iter().map(|spec| render_for(spec, plan)).collect()
}

// ---------------------------------------------------------------------------
// Template bodies
// ---------------------------------------------------------------------------

const APP_CONF_TEMPLATE: &str = r#"# server basic conf
AppName = {{.Appname}}

# run mode dev|prod
RunMode = prod

RouterCaseSensitive = false
ServerName = server01
RecoverPanic = true
MaxMemory = 1 << 26
EnableErrorsShow = true

# server listen ip:port
TCPAddr = 127.0.0.1
TCPPort = 60060

# client buffer size
MsgSize = 10000

# server monitor conf
ServerTimeOut = 0
ListenTCP4 = false
EnableHTTP = false
HTTPAddr = 127.0.0.1
HTTPPort = 60100
EnableAdmin = true
AdminAddr = 127.0.0.1
AdminPort = 60200

# server log conf
LogAccessLogs = false
LogFileLineNum = true
LogOutputs = file, {"filename":"{{.Appname}}.log","level":7,"maxlines":0,"maxsize":0,"daily":true,"maxdays":1}

# DB conf
DBUser = user
DBPW = pw
DBAddr = localhost
DBPort = 3306
DBName = testDb
"#;

const MODELS_TEMPLATE: &str = r#"package models

import (
	"time"

	"github.com/astaxie/beego/orm"
)

type Table struct {
	ID   int       "auto"
	Time time.Time "type(datetime)"
}

type Mtable struct {
	ID   int       "auto"
	Time time.Time "type(datetime)"
}

func init() {
	orm.RegisterModel(new(Table))
	orm.RegisterModel(new(Mtable))
}

"#;

const MAIN_GO_TEMPLATE: &str = r#"package main

import (
	"fmt"
	"runtime"

	"github.com/astaxie/beego/orm"
	_ "github.com/go-sql-driver/mysql"

	"github.com/TaXingTianJi/serverFramework/core"
	"github.com/TaXingTianJi/serverFramework/utils"

	_ "{{.Appname}}/models"
	_ "{{.Appname}}/msgs"
)

func main() {
	runtime.GOMAXPROCS(runtime.NumCPU())
	core.ServerApp.Version("{{.Appname}}")

	// orm
	core.SConfig.DBConf.User = "user"
	core.SConfig.DBConf.PW = "pw"
	//core.SConfig.DBConf.Addr = "localhost"
	//core.SConfig.DBConf.Port = 3306
	//core.SConfig.DBConf.DB = "testDb"
	str := fmt.Sprintf("%s:%s@tcp(%s:%d)/%s?charset=utf8",
		core.SConfig.DBConf.User, core.SConfig.DBConf.PW,
		core.SConfig.DBConf.Addr, core.SConfig.DBConf.Port,
		core.SConfig.DBConf.DB)
	orm.RegisterDriver("mysql", orm.DRMySQL)
	orm.RegisterDataBase("default", "mysql", str)
	orm.SetMaxIdleConns("default", 30)
	orm.SetMaxOpenConns("default", 30)

	core.Run()
	//core.Run("127.0.0.1:60060")
	//core.Run("localhost")
	//core.Run(":60060")

	var wg utils.WaitGroupWrapper
	wg.Wrap(func() {
		serverRoom()
	})
	wg.Wait()
}

func serverRoom() {
	for {

	}
}

"#;

const MSGS_TEMPLATE: &str = r#"package msgs

import (
	"fmt"
	"strconv"

	"github.com/astaxie/beego/orm"

	. "github.com/TaXingTianJi/serverFramework/client"
	. "github.com/TaXingTianJi/serverFramework/core"
	. "github.com/TaXingTianJi/serverFramework/protocol"

	. "{{.Appname}}/models"
)

type MsgLogin struct {
}

func init() {
	RegisterMsg(strconv.Itoa(10011), &MsgLogin{})
}

func (m *MsgLogin) ProcessMsg(p Protocol, client Client, msg *Message) {
	ServerLogger.Info("cid[%v] msg login", client.GetID())

	o := orm.NewOrm()
	o.Using("default")
	//u := new(Mtable)
	u := new(Table)
	u.Time = msg.Timestamp
	_, err := o.Insert(u)
	if err != nil {
		ServerLogger.Error("login error %v", err)
		_, err := p.Send(client, []byte("s2c login error"))
		if err != nil {
			err = fmt.Errorf("failed to send response ->%s", err)
			client.Exit()
		}
	} else {
		e := o.Read(u)
		if e != nil {
			ServerLogger.Info("read", u.ID, u.Time)
		}

		_, err := p.Send(client, []byte("s2c login succ"))
		if err != nil {
			err = fmt.Errorf("failed to send response ->%s", err)
			client.Exit()
		}
	}

}


"#;

const FMT_SH_TEMPLATE: &str = r#"#!/bin/bash
#find . -name "*.go" | xargs goimports -w
find . -name "*.go" | xargs gofmt -w
"#;

const BUILD_SH_TEMPLATE: &str = "go build -o {{.Appname}} *.go\n";

const README_TEMPLATE: &str = "###\t\t{{.Appname}} based on serverFramework\t\t###\n\n* {{.Appname}}\n";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn demo_plan() -> ScaffoldPlan {
        ScaffoldPlan {
            project_name: "demo".to_string(),
            target_dir: PathBuf::from("/ws/src/acme/demo"),
            canonical_id: "acme/demo".to_string(),
        }
    }

    fn spec(name: &str) -> &'static TemplateSpec {
        TEMPLATES.iter().find(|t| t.name == name).unwrap()
    }

    #[test]
    fn seven_templates_in_write_order() {
        let destinations: Vec<&str> = TEMPLATES.iter().map(|t| t.destination).collect();
        assert_eq!(
            destinations,
            vec![
                "conf/app.conf",
                "models/tables.go",
                "msgs/msglogin.go",
                "main.go",
                "fmt.sh",
                "build.sh",
                "README.md",
            ]
        );
    }

    #[test]
    fn only_shell_scripts_are_executable() {
        for t in TEMPLATES.iter() {
            assert_eq!(t.executable, t.destination.ends_with(".sh"), "{}", t.name);
        }
    }

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render(spec("config"), "demo");
        assert!(out.contains("AppName = demo"));
        assert!(out.contains(r#""filename":"demo.log""#));
        assert!(!out.contains(PLACEHOLDER));
    }

    #[test]
    fn render_is_deterministic() {
        let plan = demo_plan();
        assert_eq!(render_all(&plan), render_all(&plan));
    }

    #[test]
    fn template_without_placeholder_renders_unchanged() {
        for t in TEMPLATES.iter().filter(|t| !t.body.contains(t.placeholder)) {
            assert_eq!(render(t, "anything"), t.body, "{}", t.name);
        }
    }

    #[test]
    fn code_templates_use_canonical_id() {
        let plan = demo_plan();
        let main = render_for(spec("main"), &plan);
        assert!(main.content.contains(r#"_ "acme/demo/models""#));
        assert!(main.content.contains(r#"core.ServerApp.Version("acme/demo")"#));
        assert!(!main.content.contains(PLACEHOLDER));

        let msgs = render_for(spec("msgs"), &plan);
        assert!(msgs.content.contains(r#". "acme/demo/models""#));
    }

    #[test]
    fn human_facing_templates_use_project_name() {
        let plan = demo_plan();
        let build = render_for(spec("build"), &plan);
        assert_eq!(build.content, "go build -o demo *.go\n");

        let readme = render_for(spec("readme"), &plan);
        assert!(readme.content.contains("* demo"));
        assert!(!readme.content.contains("acme/demo"));
    }

    #[test]
    fn code_bodies_keep_commented_alternatives() {
        let main = spec("main").body;
        assert!(main.contains("\t//core.SConfig.DBConf.Addr = \"localhost\"\n"));
        assert!(main.contains("\t//core.SConfig.DBConf.DB = \"testDb\"\n"));
        assert!(main.contains(
            "\tcore.Run()\n\t//core.Run(\"127.0.0.1:60060\")\n\t//core.Run(\"localhost\")\n\t//core.Run(\":60060\")\n"
        ));
        assert!(main.ends_with("}\n\n"));

        let msgs = spec("msgs").body;
        assert!(msgs.contains("\t//u := new(Mtable)\n\tu := new(Table)\n"));
        assert!(msgs.ends_with("\t}\n\n}\n\n\n"));

        assert!(spec("models").body.ends_with("}\n\n"));
    }

    #[test]
    fn destinations_are_under_target_dir() {
        let plan = demo_plan();
        for file in render_all(&plan) {
            assert!(file.destination.starts_with(Path::new("/ws/src/acme/demo")));
        }
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        for file in render_all(&demo_plan()) {
            assert!(!file.content.contains(PLACEHOLDER));
        }
    }
}
